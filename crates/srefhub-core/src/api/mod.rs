//! REST API access: HTTP client, list queries and the session token.

pub mod client;
pub mod query;
pub mod session;

pub use client::ApiClient;
pub use query::{GalleryQuery, GallerySort, PostQuery, PostSort};
pub use session::{Session, SessionData, SESSION_FILE};
