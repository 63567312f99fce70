//! UI Components for SrefHub.
//!
//! App-specific components that need the API context. Generic widgets
//! live in `srefhub-ui`.

pub mod cards;
mod clipboard;
mod infinite_scroll;
mod nav_header;

pub use cards::{GalleryCard, MasonryCard, PromptCard, SrefCard};
pub use clipboard::copy_to_clipboard;
pub use infinite_scroll::{ListStatus, ScrollSentinel};
pub use nav_header::{NavHeader, NavLocation};
