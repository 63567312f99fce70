//! Explore page - style references from every user.
//!
//! Sort pills and a debounced search box feed one `PostQuery`; changing
//! either restarts the list from the first page.

use dioxus::prelude::*;
use srefhub_core::{PostQuery, PostSort, StylePost};
use srefhub_ui::{post_sort_options, FilterPills, SearchInput};

use crate::components::{ListStatus, NavHeader, NavLocation, ScrollSentinel, SrefCard};
use crate::context::use_app;
use crate::hooks::{use_debounced_text, use_infinite_list};

#[component]
pub fn Explore() -> Element {
    let ctx = use_app();
    let grid_style = ctx.config.grid.container_style();

    let mut sort = use_signal(PostSort::default);
    let mut typed = use_signal(String::new);
    let search = use_debounced_text(ctx.config.search_debounce);
    let settled = search.settled;

    let query = use_memo(move || PostQuery::new(None, sort(), Some(settled())));
    let mut list = use_infinite_list::<PostQuery, StylePost>(query);

    let status = ListStatus::of(&list.read());
    let posts = list.read().items().to_vec();
    let total = list.read().total();

    rsx! {
        NavHeader { current: NavLocation::Explore }

        main { class: "page explore-page",
            header { class: "page-header",
                h1 { class: "page-title", "Explore styles" }
                if let Some(total) = total {
                    p { class: "subtitle", "{total} style references" }
                }
            }

            div { class: "filter-bar",
                FilterPills {
                    options: post_sort_options(),
                    selected: sort().as_str().to_string(),
                    on_select: move |value: String| {
                        if let Ok(parsed) = value.parse::<PostSort>() {
                            sort.set(parsed);
                        }
                    },
                    aria_label: "Sort".to_string(),
                }
                SearchInput {
                    value: typed(),
                    placeholder: "Search styles...".to_string(),
                    oninput: move |value: String| {
                        typed.set(value.clone());
                        search.push(value);
                    },
                }
            }

            div { class: "masonry-grid", style: "{grid_style}",
                for post in posts {
                    SrefCard { key: "{post.id}", post }
                }
            }

            ScrollSentinel {
                id: "explore-sentinel".to_string(),
                status,
                noun: "styles".to_string(),
                on_visible: move |visible| list.write().sentinel_changed(visible),
                on_retry: move |_| list.write().retry(),
            }
        }
    }
}
