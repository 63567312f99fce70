//! Input Field Components
//!
//! Text inputs, textareas and the search box.

use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Muted text after the label, e.g. "optional"
    #[props(default)]
    pub hint: Option<String>,
    /// Input type (text, password, url, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// Labelled single-line text input
///
/// # Example
///
/// ```rust,ignore
/// let mut token = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: token(),
///         oninput: move |s| token.set(s),
///         label: "API token".to_string(),
///         input_type: "password".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props.id.clone().unwrap_or_else(|| next_id("input"));
    let input_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("input-field {}", extra),
        _ => "input-field".to_string(),
    };

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { class: "input-hint", " ({hint})" }
                    }
                }
            }
            input {
                id: "{id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default = 4)]
    pub rows: u32,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub id: Option<String>,
}

/// Multi-line text input, used by the post editor
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = props.id.clone().unwrap_or_else(|| next_id("textarea"));

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                }
            }
            textarea {
                id: "{id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// Unique element id for label association
fn next_id(prefix: &str) -> String {
    format!("{}-{}", prefix, NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

/// Search input with icon
///
/// Reports every keystroke; callers debounce before querying.
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default = "Search...".to_string())]
    pub placeholder: String,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "\u{1F50D}" }
            input {
                class: "input-field search-input",
                r#type: "search",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = next_id("input");
        let b = next_id("input");
        assert_ne!(a, b);
        assert!(a.starts_with("input-"));
    }
}
