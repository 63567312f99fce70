//! Gallery Card
//!
//! Masonry card for a curated gallery item with like/favorite/copy
//! actions. Actions update the counters immediately and roll back with a
//! toast if the server refuses.

use dioxus::prelude::*;
use srefhub_core::{GalleryItem, LazyCard, ToggleAction, ToggleState};
use srefhub_ui::{Button, ButtonVariant};

use super::MasonryCard;
use crate::components::copy_to_clipboard;
use crate::context::{use_app, use_feedback};

#[component]
pub fn GalleryCard(
    item: GalleryItem,
    /// Called with a tag when its chip is clicked
    #[props(default)]
    on_tag: Option<EventHandler<String>>,
) -> Element {
    let ctx = use_app();
    let feedback = use_feedback();
    let grid = ctx.config.grid;
    let initial = ToggleState::from_item(&item);
    let card = use_signal(move || LazyCard::new(grid).with_toggles(initial));

    let id = item.id.clone();
    let prompt = item.prompt.clone();
    let api = ctx.api.clone();
    let mut card_state = card;

    let toggle = use_callback(move |action: ToggleAction| {
        if action == ToggleAction::Copy && copy_to_clipboard(&prompt) {
            feedback.success("Prompt copied");
        }

        let pending = card_state.write().toggles.begin(action);
        let api = api.clone();
        let id = id.clone();
        spawn(async move {
            let result = api.gallery_action(&id, action).await;
            if let Some(notice) = card_state.write().toggles.settle(pending, &result) {
                feedback.notify(notice);
            }
            if let Err(e) = &result {
                feedback.check_auth(e);
            }
        });
    });

    let toggles = card.read().toggles;
    let dom_id = format!("gallery-{}", item.id);

    rsx! {
        MasonryCard {
            dom_id,
            card,
            media_url: item.preview_url().to_string(),
            media_type: item.media_type,
            alt: item.title.clone(),

            div { class: "card-body",
                div { class: "card-title-row",
                    h3 { class: "card-title", "{item.title}" }
                    if !item.model.is_empty() {
                        span { class: "model-badge", "{item.model}" }
                    }
                }
                p { class: "card-prompt", title: "{item.prompt}", "{item.prompt}" }

                if !item.tags.is_empty() {
                    div { class: "tag-row",
                        for tag in item.tags.iter().cloned() {
                            button {
                                key: "{tag}",
                                r#type: "button",
                                class: "tag",
                                onclick: {
                                    let tag = tag.clone();
                                    move |evt: Event<MouseData>| {
                                        evt.stop_propagation();
                                        if let Some(handler) = &on_tag {
                                            handler.call(tag.clone());
                                        }
                                    }
                                },
                                "#{tag}"
                            }
                        }
                    }
                }

                div { class: "card-actions",
                    Button {
                        variant: ButtonVariant::Chip,
                        active: toggles.liked,
                        onclick: move |_| toggle.call(ToggleAction::Like),
                        if toggles.liked { "\u{2665} {toggles.likes}" } else { "\u{2661} {toggles.likes}" }
                    }
                    Button {
                        variant: ButtonVariant::Chip,
                        active: toggles.favorited,
                        onclick: move |_| toggle.call(ToggleAction::Favorite),
                        if toggles.favorited { "\u{2605} {toggles.favorites}" } else { "\u{2606} {toggles.favorites}" }
                    }
                    Button {
                        variant: ButtonVariant::Chip,
                        onclick: move |_| toggle.call(ToggleAction::Copy),
                        "Copy {toggles.copies}"
                    }
                }
            }
        }
    }
}
