//! Reusable UI components
//!
//! Stateless where possible: components receive values and report changes
//! through `EventHandler`s. The toast stack is the exception and owns a
//! timer that expires notices.

mod button;
mod filter_pills;
mod input;
mod pager;
mod stats;
mod toast;

pub use button::*;
pub use filter_pills::*;
pub use input::*;
pub use pager::*;
pub use stats::*;
pub use toast::*;
