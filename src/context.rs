//! App context for SrefHub.
//!
//! Everything app-wide lives in one [`AppContext`] created by `App` at
//! startup and handed down through `use_context`. Per-session UI state
//! (toasts, the expired-session flag) rides along as signals in
//! [`Feedback`].
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let api = use_api();
//! let feedback = use_feedback();
//!
//! spawn(async move {
//!     if let Err(e) = api.delete_post(&id).await {
//!         feedback.error("Delete failed", &e);
//!     }
//! });
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use srefhub_core::{ApiClient, ClientConfig, HubError, Notice, Notifications};

/// Get the data directory for the application.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Get the startup client configuration.
pub fn get_client_config() -> ClientConfig {
    crate::get_client_config()
}

/// API client plus the configuration it was built from.
#[derive(Clone)]
pub struct AppContext {
    pub api: ApiClient,
    pub config: ClientConfig,
}

/// User-facing feedback channels shared by every page.
#[derive(Clone, Copy)]
pub struct Feedback {
    pub notices: Signal<Notifications>,
    /// Set when the server rejects the token; the nav header reacts by
    /// routing to the login page.
    pub session_expired: Signal<bool>,
    /// Bumped on sign-in/out so session-dependent views re-read the session
    pub session_version: Signal<u64>,
}

impl Feedback {
    pub fn notify(&self, notice: Notice) {
        let mut notices = self.notices;
        notices.write().push(notice);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(Notice::success(message));
    }

    /// Toast `context: error` and flag the session when the token was rejected.
    pub fn error(&self, context: &str, err: &HubError) {
        tracing::warn!(kind = err.kind(), error = %err, "{}", context);
        if err.is_unauthorized() {
            self.expire_session();
        }
        self.notify(Notice::error(format!("{}: {}", context, err)));
    }

    /// Flag a toggle/settle failure that already produced its own notice.
    pub fn check_auth(&self, err: &HubError) {
        if err.is_unauthorized() {
            self.expire_session();
        }
    }

    pub fn expire_session(&self) {
        let mut expired = self.session_expired;
        expired.set(true);
        self.session_changed();
    }

    pub fn session_changed(&self) {
        let mut version = self.session_version;
        version += 1;
    }
}

/// Hook to access the app context.
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

/// Hook to access the API client.
pub fn use_api() -> ApiClient {
    use_app().api
}

/// Hook to access the feedback channels.
pub fn use_feedback() -> Feedback {
    use_context::<Feedback>()
}
