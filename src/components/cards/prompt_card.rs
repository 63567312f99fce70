//! Prompt card for dashboard lists.

use dioxus::prelude::*;
use srefhub_core::Prompt;
use srefhub_ui::{Button, ButtonVariant};

use crate::components::copy_to_clipboard;
use crate::context::use_feedback;

#[component]
pub fn PromptCard(
    prompt: Prompt,
    /// Shown as a delete button when set (receives the prompt id)
    #[props(default)]
    on_delete: Option<EventHandler<String>>,
) -> Element {
    let feedback = use_feedback();
    let content = prompt.content.clone();
    let id = prompt.id.clone();

    rsx! {
        div { class: "prompt-card",
            div { class: "card-title-row",
                h4 { class: "card-title", "{prompt.title}" }
                span { class: "difficulty-badge {prompt.difficulty}", "{prompt.difficulty}" }
            }
            if !prompt.category.is_empty() {
                span { class: "category", "{prompt.category}" }
            }
            p { class: "prompt-content", "{prompt.content}" }

            div { class: "card-actions",
                span { class: "card-counts", "\u{2665} {prompt.likes} \u{00b7} \u{2605} {prompt.favorites}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        if copy_to_clipboard(&content) {
                            feedback.success("Prompt copied");
                        }
                    },
                    "Copy"
                }
                if let Some(handler) = on_delete {
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| handler.call(id.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}
