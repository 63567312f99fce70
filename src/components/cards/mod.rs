//! Content cards.
//!
//! [`MasonryCard`] is the lazy grid cell; the others wrap it (or stand
//! alone in dashboard lists) for each content kind.

mod gallery_card;
mod masonry_card;
mod prompt_card;
mod sref_card;

pub use gallery_card::GalleryCard;
pub use masonry_card::MasonryCard;
pub use prompt_card::PromptCard;
pub use sref_card::SrefCard;
