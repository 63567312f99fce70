//! SrefHub UI Components
//!
//! Reusable Dioxus building blocks shared by the desktop app: buttons,
//! filter pills, text inputs, stat boxes, the pager and the toast stack.
//!
//! ## Styling
//!
//! Components only emit class names. The stylesheet lives in the app
//! crate's theme module:
//! - **Gold (#d4af37)**: primary actions, selected pills
//! - **Cyan (#00d4aa)**: links, focus rings, active chips
//! - **Void (#0a0a0a)**: page background
//! - **Danger (#ff3366)**: destructive actions and error toasts

pub mod components;

pub use components::*;
