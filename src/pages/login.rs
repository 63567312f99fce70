//! Login page - paste an API token issued by the SrefHub web app.

use dioxus::prelude::*;
use srefhub_ui::{Button, ButtonVariant, Input};

use crate::app::Route;
use crate::components::NavHeader;
use crate::context::{use_api, use_feedback};

#[component]
pub fn Login() -> Element {
    let api = use_api();
    let feedback = use_feedback();
    let navigator = use_navigator();

    let mut token = use_signal(String::new);
    let mut user_id = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let submit = move |_: ()| {
        let value = token().trim().to_string();
        if value.is_empty() {
            error.set(Some("Token must not be empty".to_string()));
            return;
        }
        let user = Some(user_id().trim().to_string()).filter(|u| !u.is_empty());

        match api.session().sign_in(value, user) {
            Ok(()) => {
                tracing::info!("Signed in from login page");
                error.set(None);
                feedback.session_changed();
                feedback.success("Signed in");
                navigator.push(Route::Dashboard {});
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to store session");
                error.set(Some(format!("Could not save the session: {}", e)));
            }
        }
    };

    rsx! {
        NavHeader {}

        main { class: "page login-page",
            div { class: "login-card",
                h1 { class: "page-title", "Sign in" }
                p { class: "body-text",
                    "Paste the API token from your SrefHub account settings. "
                    "Add your user id to see your dashboard."
                }

                Input {
                    label: "API token".to_string(),
                    input_type: "password".to_string(),
                    value: token(),
                    oninput: move |value: String| token.set(value),
                    required: true,
                }
                Input {
                    label: "User id".to_string(),
                    value: user_id(),
                    oninput: move |value: String| user_id.set(value),
                    hint: "Optional".to_string(),
                }

                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    onclick: submit,
                    "Sign in"
                }
            }
        }
    }
}
