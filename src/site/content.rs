//! CMS content references and button-hierarchy labeling.

/// Content-type tag carried by button references.
pub const BUTTON_KIND: &str = "ContentfulComponentButton";

/// A structured pointer to a CMS-managed content entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRef {
    /// Content-type tag, e.g. [`BUTTON_KIND`]
    pub kind: String,
    /// Stable identifier of the referenced entry
    pub id: String,
}

impl ContentRef {
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id: id.into(),
        }
    }

    pub fn is_button(&self) -> bool {
        self.kind == BUTTON_KIND
    }
}

/// Label a button's 1-based position among its sibling references as
/// `"<position> of <total>"`.
///
/// Only button-typed entries can match the target; a target that does not
/// appear yields position 0. The total is the length of the whole list,
/// non-button entries included.
pub fn button_hierarchy(refs: &[ContentRef], target: &ContentRef) -> String {
    let position = refs
        .iter()
        .position(|r| r.is_button() && r.id == target.id)
        .map(|i| i + 1)
        .unwrap_or(0);

    format!("{} of {}", position, refs.len())
}
