//! SrefHub Core Library
//!
//! Client-side engine for a style-reference and prompt sharing service.
//!
//! ## Overview
//!
//! Users publish Midjourney `--sref` style posts and generation prompts,
//! browse a curated gallery of AI-generated media, follow each other and
//! favorite content. This crate holds everything below the UI:
//!
//! - **api**: REST client with bearer-token session and error taxonomy
//! - **layout**: masonry grid-row spans from image aspect ratio
//! - **lazy**: fire-once reveal, span tracking and like/favorite/copy toggles
//! - **paging**: infinite list accumulation keyed by the full query
//! - **debounce**: trailing-edge debouncer for search input
//! - **dashboard**: seven-resource aggregator with partial-failure isolation
//! - **admin**: export download and CSV/JSON import parsing
//!
//! ## Quick Start
//!
//! ```ignore
//! use srefhub_core::{ApiClient, ClientConfig, GalleryQuery, InfiniteList, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(&ClientConfig::from_env(), Session::in_memory())?;
//!
//!     let mut list = InfiniteList::new(GalleryQuery::default());
//!     while list.fetch_next(&client).await && list.has_next_page() {}
//!
//!     for item in list.items() {
//!         println!("{} ({} likes)", item.title, item.likes);
//!     }
//!     Ok(())
//! }
//! ```

pub mod admin;
pub mod api;
pub mod config;
pub mod dashboard;
pub mod debounce;
pub mod error;
pub mod layout;
pub mod lazy;
pub mod media;
pub mod notify;
pub mod paging;
pub mod types;

// Re-exports
pub use admin::{ExportFormat, ImportSummary, Record, ResourceKind};
pub use api::{ApiClient, GalleryQuery, GallerySort, PostQuery, PostSort, Session};
pub use config::ClientConfig;
pub use dashboard::{
    load_dashboard, load_posts_page, load_prompts_page, DashboardSource, DashboardState,
    DashboardStore, PageState,
};
pub use debounce::Debouncer;
pub use error::{HubError, HubResult};
pub use layout::{compute_span, GridMetrics, NaturalSize, SpanTracker, FALLBACK_SPAN};
pub use lazy::{LazyCard, PendingToggle, RevealLatch, ToggleAction, ToggleState};
pub use media::MediaItem;
pub use notify::{Notice, NoticeLevel, Notifications};
pub use paging::{InfiniteList, PageRequest, PageSource};
pub use types::*;
