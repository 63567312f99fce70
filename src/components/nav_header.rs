//! Navigation Header Component
//!
//! App title, page links and the session control. Also the one place that
//! reacts to an expired session by routing to the login page.

use dioxus::prelude::*;
use srefhub_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::context::{use_api, use_feedback};

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Explore,
    Gallery,
    Dashboard,
    Admin,
}

impl NavLocation {
    pub const ALL: [NavLocation; 5] = [
        NavLocation::Home,
        NavLocation::Explore,
        NavLocation::Gallery,
        NavLocation::Dashboard,
        NavLocation::Admin,
    ];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::Explore => "Explore",
            NavLocation::Gallery => "Gallery",
            NavLocation::Dashboard => "Dashboard",
            NavLocation::Admin => "Admin",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Home {},
            NavLocation::Explore => Route::Explore {},
            NavLocation::Gallery => Route::Gallery {},
            NavLocation::Dashboard => Route::Dashboard {},
            NavLocation::Admin => Route::Admin {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the app; `None` on pages outside the nav
    #[props(default)]
    pub current: Option<NavLocation>,
}

/// Navigation Header component
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let navigator = use_navigator();
    let mut session_expired = feedback.session_expired;

    // A rejected token anywhere sends the user to log in again
    use_effect(move || {
        if session_expired() {
            session_expired.set(false);
            tracing::info!("Session expired, routing to login");
            navigator.push(Route::Login {});
        }
    });

    // Re-read the session whenever it changes
    let _ = (feedback.session_version)();
    let signed_in_as = if api.session().is_authenticated() {
        Some(api.session().user_id().unwrap_or_else(|| "signed in".to_string()))
    } else {
        None
    };

    let sign_out = move |_: ()| {
        if let Err(e) = api.session().evict() {
            tracing::warn!(error = %e, "Failed to remove saved session");
        }
        feedback.session_changed();
        feedback.success("Signed out");
    };

    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                div { class: "nav-title",
                    Link { to: Route::Home {}, class: "app-title", "SrefHub" }
                }

                nav { class: "nav-links",
                    for location in NavLocation::ALL {
                        Link {
                            to: location.route(),
                            class: if Some(location) == props.current { "nav-link active" } else { "nav-link" },
                            "{location.display_name()}"
                        }
                    }
                }

                div { class: "nav-session",
                    if let Some(user) = signed_in_as {
                        span { class: "session-user", "{user}" }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: sign_out,
                            "Sign out"
                        }
                    } else {
                        Link { to: Route::Login {}, class: "btn-primary nav-sign-in", "Sign in" }
                    }
                }
            }
        }
    }
}
