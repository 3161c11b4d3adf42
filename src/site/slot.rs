//! Mount/unmount callback slot.

use std::sync::Arc;

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A slot tracking one attached value, notifying callbacks on attach and
/// detach the way an element ref hook does.
///
/// Replacing the value fires the unmount callback for the old value before
/// the mount callback for the new one. The slot owns its callbacks for its
/// whole lifetime; callers wanting different callbacks construct a new
/// slot.
pub struct CallbackSlot<T> {
    current: Option<T>,
    on_mount: Option<Callback<T>>,
    on_unmount: Option<Callback<T>>,
}

impl<T> CallbackSlot<T> {
    pub fn new() -> Self {
        Self {
            current: None,
            on_mount: None,
            on_unmount: None,
        }
    }

    /// Register a callback invoked with each newly attached value.
    pub fn on_mount<F>(&mut self, cb: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.on_mount = Some(Arc::new(cb));
    }

    /// Register a callback invoked with each value being detached.
    pub fn on_unmount<F>(&mut self, cb: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.on_unmount = Some(Arc::new(cb));
    }

    /// Attach `value`, or detach with `None`.
    pub fn set(&mut self, value: Option<T>) {
        if let Some(old) = self.current.take() {
            if let Some(cb) = &self.on_unmount {
                cb(&old);
            }
        }

        self.current = value;

        if let Some(v) = &self.current {
            if let Some(cb) = &self.on_mount {
                cb(v);
            }
        }
    }

    /// Detach the current value, firing the unmount callback.
    pub fn clear(&mut self) {
        self.set(None);
    }

    /// The currently attached value, if any.
    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }
}

impl<T> Default for CallbackSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_mount_fires_for_new_value() {
        let mounted = Arc::new(Mutex::new(Vec::new()));
        let mounted_clone = mounted.clone();

        let mut slot = CallbackSlot::new();
        slot.on_mount(move |v: &u32| mounted_clone.lock().unwrap().push(*v));

        slot.set(Some(1));
        slot.set(Some(2));

        assert_eq!(*mounted.lock().unwrap(), vec![1, 2]);
        assert_eq!(slot.current(), Some(&2));
    }

    #[test]
    fn test_unmount_fires_before_mount_on_replacement() {
        let events = Arc::new(Mutex::new(Vec::new()));

        let mut slot = CallbackSlot::new();
        let ev = events.clone();
        slot.on_mount(move |v: &u32| ev.lock().unwrap().push(format!("mount {}", v)));
        let ev = events.clone();
        slot.on_unmount(move |v: &u32| ev.lock().unwrap().push(format!("unmount {}", v)));

        slot.set(Some(1));
        slot.set(Some(2));
        slot.clear();

        assert_eq!(
            *events.lock().unwrap(),
            vec!["mount 1", "unmount 1", "mount 2", "unmount 2"]
        );
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_none_never_mounts() {
        let mounted = Arc::new(Mutex::new(0u32));
        let mounted_clone = mounted.clone();

        let mut slot: CallbackSlot<u32> = CallbackSlot::new();
        slot.on_mount(move |_| *mounted_clone.lock().unwrap() += 1);

        slot.set(None);
        slot.clear();

        assert_eq!(*mounted.lock().unwrap(), 0);
    }
}
