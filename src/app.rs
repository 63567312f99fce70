use dioxus::prelude::*;
use srefhub_core::{ApiClient, Notifications, Session};
use srefhub_ui::ToastStack;

use crate::context::{get_client_config, get_data_dir, AppContext, Feedback};
use crate::pages::{Admin, Dashboard, Explore, Gallery, Home, Login};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page
/// - `/explore` - Style posts with sort and search
/// - `/gallery` - Curated AI gallery with model/tag filters
/// - `/dashboard` - The signed-in user's content and network
/// - `/admin` - Export and import
/// - `/login` - Paste an API token
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/explore")]
    Explore {},
    #[route("/gallery")]
    Gallery {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/admin")]
    Admin {},
    #[route("/login")]
    Login {},
}

/// Root application component.
///
/// Builds the API client once, provides the app context and feedback
/// signals, and renders global styles, routing and the toast stack.
#[component]
pub fn App() -> Element {
    let context = use_hook(build_context);

    let notices = use_signal(Notifications::default);
    let session_expired = use_signal(|| false);
    let session_version = use_signal(|| 0u64);
    use_context_provider(|| Feedback {
        notices,
        session_expired,
        session_version,
    });

    match context {
        Ok(context) => {
            use_context_provider(|| context);
            rsx! {
                style { {GLOBAL_STYLES} }
                Router::<Route> {}
                ToastStack { notices }
            }
        }
        Err(message) => rsx! {
            style { {GLOBAL_STYLES} }
            main { class: "startup-error",
                h1 { class: "page-title", "SrefHub could not start" }
                p { class: "body-text", "{message}" }
            }
        },
    }
}

fn build_context() -> Result<AppContext, String> {
    let config = get_client_config();
    let data_dir = get_data_dir();

    let session = match Session::open(&data_dir) {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!(error = %e, data_dir = ?data_dir, "Saved session unreadable, starting signed out");
            Session::in_memory()
        }
    };

    match ApiClient::new(&config, session) {
        Ok(api) => {
            tracing::info!(api = %api.base_url(), signed_in = api.session().is_authenticated(), "API client ready");
            Ok(AppContext { api, config })
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to build API client");
            Err(e.to_string())
        }
    }
}
