//! Gallery page - curated AI images and videos.
//!
//! Model, sort and tag filters plus a debounced search combine into one
//! `GalleryQuery`. Tags on a card can be clicked to filter by them.

use dioxus::prelude::*;
use srefhub_core::{GalleryItem, GalleryQuery, GallerySort};
use srefhub_ui::{gallery_sort_options, model_options, Button, ButtonVariant, FilterPills, SearchInput};

use crate::components::{GalleryCard, ListStatus, NavHeader, NavLocation, ScrollSentinel};
use crate::context::use_app;
use crate::hooks::{use_debounced_text, use_infinite_list};

#[component]
pub fn Gallery() -> Element {
    let ctx = use_app();
    let grid_style = ctx.config.grid.container_style();

    let mut model = use_signal(String::new);
    let mut sort = use_signal(GallerySort::default);
    let mut tag = use_signal(String::new);
    let mut typed = use_signal(String::new);
    let search = use_debounced_text(ctx.config.search_debounce);
    let settled = search.settled;

    let query = use_memo(move || {
        GalleryQuery::new(Some(model()), Some(tag()), sort(), Some(settled()))
    });
    let mut list = use_infinite_list::<GalleryQuery, GalleryItem>(query);

    let status = ListStatus::of(&list.read());
    let items = list.read().items().to_vec();
    let total = list.read().total();

    rsx! {
        NavHeader { current: NavLocation::Gallery }

        main { class: "page gallery-page",
            header { class: "page-header",
                h1 { class: "page-title", "Gallery" }
                if let Some(total) = total {
                    p { class: "subtitle", "{total} curated generations" }
                }
            }

            div { class: "filter-bar",
                FilterPills {
                    options: model_options(),
                    selected: model(),
                    on_select: move |value: String| model.set(value),
                    aria_label: "Model".to_string(),
                }
                FilterPills {
                    options: gallery_sort_options(),
                    selected: sort().as_str().to_string(),
                    on_select: move |value: String| {
                        if let Ok(parsed) = value.parse::<GallerySort>() {
                            sort.set(parsed);
                        }
                    },
                    aria_label: "Sort".to_string(),
                }
                SearchInput {
                    value: typed(),
                    placeholder: "Search prompts...".to_string(),
                    oninput: move |value: String| {
                        typed.set(value.clone());
                        search.push(value);
                    },
                }
                if !tag().is_empty() {
                    Button {
                        variant: ButtonVariant::Chip,
                        active: true,
                        onclick: move |_| tag.set(String::new()),
                        "#{tag} \u{00d7}"
                    }
                }
            }

            div { class: "masonry-grid", style: "{grid_style}",
                for item in items {
                    GalleryCard {
                        key: "{item.id}",
                        item,
                        on_tag: move |value: String| tag.set(value),
                    }
                }
            }

            ScrollSentinel {
                id: "gallery-sentinel".to_string(),
                status,
                noun: "generations".to_string(),
                on_visible: move |visible| list.write().sentinel_changed(visible),
                on_retry: move |_| list.write().retry(),
            }
        }
    }
}
