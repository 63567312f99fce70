//! Toast Stack
//!
//! Renders the active [`Notifications`] in a corner stack. Notices expire
//! on their own after the queue's TTL or when the user dismisses them.

use std::time::{Duration, Instant};

use dioxus::prelude::*;
use srefhub_core::notify::Notifications;

use super::CloseButton;

/// How often the stack checks for expired notices
const EXPIRE_TICK: Duration = Duration::from_millis(500);

/// Fixed-position stack of toasts bound to a shared notification queue.
///
/// # Example
///
/// ```rust,ignore
/// let notices = use_signal(Notifications::default);
/// rsx! { ToastStack { notices } }
/// ```
#[component]
pub fn ToastStack(notices: Signal<Notifications>) -> Element {
    let mut notices = notices;

    use_future(move || async move {
        loop {
            tokio::time::sleep(EXPIRE_TICK).await;
            // peek first so an idle queue doesn't trigger a re-render
            if notices.peek().is_empty() {
                continue;
            }
            let removed = notices.write().expire(Instant::now());
            if removed > 0 {
                tracing::trace!(removed, "Expired notices");
            }
        }
    });

    let active: Vec<_> = notices.read().active().cloned().collect();

    rsx! {
        div {
            class: "toast-stack",
            role: "status",
            "aria-live": "polite",
            for notice in active {
                {
                    let id = notice.id;
                    let class = format!("toast {}", notice.level.class());
                    rsx! {
                        div {
                            key: "{id}",
                            class: "{class}",
                            span { class: "toast-message", "{notice.message}" }
                            CloseButton {
                                onclick: move |_| {
                                    notices.write().dismiss(id);
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
