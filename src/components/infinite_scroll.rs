//! Infinite Scroll Sentinel
//!
//! Invisible marker below a list. While it is within the configured margin
//! of the viewport the list keeps requesting pages.

use std::fmt::Debug;

use dioxus::prelude::*;
use srefhub_core::{Identified, InfiniteList};
use srefhub_ui::{Button, ButtonVariant};

use crate::context::use_app;
use crate::hooks::observe_visibility;

/// What the footer of an infinite list should show
#[derive(Debug, Clone, PartialEq)]
pub enum ListStatus {
    Loading,
    Failed(String),
    Empty,
    End,
    More,
}

impl ListStatus {
    pub fn of<Q, T>(list: &InfiniteList<Q, T>) -> Self
    where
        Q: Clone + PartialEq + Debug,
        T: Identified + Clone,
    {
        if list.is_fetching_next_page() {
            ListStatus::Loading
        } else if let Some(message) = list.last_error() {
            ListStatus::Failed(message.to_string())
        } else if list.is_empty() && !list.is_initial() {
            ListStatus::Empty
        } else if !list.has_next_page() {
            ListStatus::End
        } else {
            ListStatus::More
        }
    }
}

/// Footer for an infinite list: loading indicator, retry on failure,
/// end-of-list message, and the observed sentinel element.
#[component]
pub fn ScrollSentinel(
    /// DOM id for the sentinel; unique per page
    id: String,
    status: ListStatus,
    /// Called with every intersection change
    on_visible: EventHandler<bool>,
    on_retry: EventHandler<()>,
    /// Noun for the empty message, e.g. "posts"
    #[props(default = "items".to_string())]
    noun: String,
) -> Element {
    let margin = use_app().config.sentinel_margin_px;
    let observed_id = id.clone();

    rsx! {
        div {
            id: "{id}",
            class: "scroll-sentinel",
            onmounted: move |_| {
                observe_visibility(observed_id.clone(), margin, false, move |visible| {
                    on_visible.call(visible);
                });
            },

            {match status {
                ListStatus::Loading => rsx! {
                    div { class: "list-status",
                        div { class: "loading-spinner" }
                        "Loading more..."
                    }
                },
                ListStatus::Failed(message) => rsx! {
                    div { class: "list-status error",
                        span { "{message}" }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| on_retry.call(()),
                            "Retry"
                        }
                    }
                },
                ListStatus::Empty => rsx! {
                    div { class: "list-status", "No {noun} found" }
                },
                ListStatus::End => rsx! {
                    div { class: "list-status", "You've reached the end" }
                },
                ListStatus::More => rsx! {},
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srefhub_core::{HubError, Page, PageInfo};

    #[derive(Debug, Clone, PartialEq)]
    struct Row(String);

    impl Identified for Row {
        fn id(&self) -> &str {
            &self.0
        }
    }

    fn page(ids: &[&str], page: u32, total_pages: u32) -> Page<Row> {
        Page::new(
            ids.iter().map(|id| Row(id.to_string())).collect(),
            PageInfo { page, total_pages, total: ids.len() as u64 },
        )
    }

    #[test]
    fn status_follows_list_lifecycle() {
        let mut list: InfiniteList<String, Row> = InfiniteList::new(String::new());
        assert_eq!(ListStatus::of(&list), ListStatus::More);

        let request = list.begin_next().unwrap();
        assert_eq!(ListStatus::of(&list), ListStatus::Loading);

        list.complete(request, Err(HubError::Network("down".into())));
        assert!(matches!(ListStatus::of(&list), ListStatus::Failed(m) if m.contains("down")));

        list.retry();
        let request = list.begin_next().unwrap();
        list.complete(request, Ok(page(&["a"], 1, 1)));
        assert_eq!(ListStatus::of(&list), ListStatus::End);
    }

    #[test]
    fn empty_result_is_reported() {
        let mut list: InfiniteList<String, Row> = InfiniteList::new(String::new());
        let request = list.begin_next().unwrap();
        list.complete(request, Ok(page(&[], 1, 0)));
        assert_eq!(ListStatus::of(&list), ListStatus::Empty);
    }
}
