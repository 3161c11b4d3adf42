//! Site content utilities
//!
//! Small, stateless helpers used by site UI code: color conversion, string
//! casing, link classification, button-hierarchy labeling, and a
//! mount/unmount callback slot. None of these touch the HTTP surface.

pub mod color;
pub mod content;
pub mod links;
pub mod slot;
pub mod text;

pub use color::hex_to_rgb;
pub use content::{button_hierarchy, ContentRef, BUTTON_KIND};
pub use links::{classify, LinkBehavior, SITE_DOMAIN};
pub use slot::CallbackSlot;
pub use text::to_camel_case;
