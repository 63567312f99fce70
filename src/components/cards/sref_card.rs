//! Style reference card for the explore grid.

use dioxus::prelude::*;
use srefhub_core::{LazyCard, StylePost};
use srefhub_ui::{Button, ButtonVariant};

use super::MasonryCard;
use crate::components::copy_to_clipboard;
use crate::context::{use_app, use_feedback};

#[component]
pub fn SrefCard(post: StylePost) -> Element {
    let grid = use_app().config.grid;
    let feedback = use_feedback();
    let card = use_signal(move || LazyCard::new(grid));

    let parameter = post.sref_parameter();
    let author = post
        .author
        .as_ref()
        .map(|a| a.display_name())
        .unwrap_or_else(|| "anonymous".to_string());
    let dom_id = format!("post-{}", post.id);

    let copy = move |_: ()| {
        if copy_to_clipboard(&parameter) {
            feedback.success(format!("Copied {}", parameter));
        }
    };

    rsx! {
        MasonryCard {
            dom_id,
            card,
            media_url: post.cover_image().unwrap_or_default().to_string(),
            alt: post.title.clone(),

            div { class: "card-body",
                h3 { class: "card-title", "{post.title}" }
                div { class: "sref-row",
                    code { class: "sref-code", "--sref {post.sref_code}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: copy,
                        "Copy"
                    }
                }
                div { class: "card-meta",
                    span { class: "card-author", "@{author}" }
                    span { class: "card-counts", "\u{2665} {post.likes} \u{00b7} {post.views} views" }
                }
            }
        }
    }
}
