//! Filter Pills Component
//!
//! Horizontal row of mutually exclusive filter choices (model, sort order,
//! tag). The selected pill is filled with the accent color.

use dioxus::prelude::*;
use srefhub_core::api::{GallerySort, PostSort};

/// One selectable pill: the value reported on select and its label
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PillOption {
    pub value: String,
    pub label: String,
}

impl PillOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for the FilterPills component
#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    /// Available choices
    pub options: Vec<PillOption>,
    /// Value of the selected choice
    pub selected: String,
    /// Handler called with the chosen value
    pub on_select: EventHandler<String>,
    /// Accessible name of the group
    #[props(default = "Filter".to_string())]
    pub aria_label: String,
}

/// Displays a horizontal row of selectable pills
///
/// # Example
///
/// ```rust,ignore
/// let mut model = use_signal(String::new);
///
/// rsx! {
///     FilterPills {
///         options: model_options(),
///         selected: model(),
///         on_select: move |m| model.set(m),
///         aria_label: "Model".to_string(),
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        div {
            class: "filter-pills",
            role: "radiogroup",
            "aria-label": "{props.aria_label}",
            for option in props.options.iter() {
                {
                    let value = option.value.clone();
                    let is_selected = selected == option.value;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{option.value}",
                            class: if is_selected { "pill selected" } else { "pill" },
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(value.clone()),
                            "{option.label}"
                        }
                    }
                }
            }
        }
    }
}

/// Generating models offered as gallery filters; the empty value means all.
pub fn model_options() -> Vec<PillOption> {
    vec![
        PillOption::new("", "All models"),
        PillOption::new("midjourney", "Midjourney"),
        PillOption::new("flux", "Flux"),
        PillOption::new("stable-diffusion", "Stable Diffusion"),
        PillOption::new("dalle", "DALL·E"),
        PillOption::new("sora", "Sora"),
    ]
}

pub fn gallery_sort_options() -> Vec<PillOption> {
    GallerySort::ALL
        .iter()
        .map(|s| PillOption::new(s.as_str(), s.label()))
        .collect()
}

pub fn post_sort_options() -> Vec<PillOption> {
    PostSort::ALL
        .iter()
        .map(|s| PillOption::new(s.as_str(), s.label()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_options_start_with_all() {
        let options = model_options();
        assert_eq!(options[0].value, "");
        assert!(options.iter().any(|o| o.value == "flux"));
    }

    #[test]
    fn sort_options_round_trip_through_parse() {
        for option in gallery_sort_options() {
            let sort: GallerySort = option.value.parse().unwrap();
            assert_eq!(sort.as_str(), option.value);
        }
        for option in post_sort_options() {
            assert!(option.value.parse::<PostSort>().is_ok());
        }
    }
}
