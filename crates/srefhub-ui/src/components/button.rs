//! Button Components
//!
//! Button styles used across the app:
//! - Primary: main call to action, filled accent
//! - Secondary: outlined, for neutral actions
//! - Danger: destructive actions (delete, unfollow)
//! - Ghost: text-only, for toolbars and card footers
//! - Chip: small rounded toggles (like, favorite, copy)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled accent button
    #[default]
    Primary,
    /// Outlined neutral button
    Secondary,
    /// Red, for destructive actions
    Danger,
    /// Borderless text button
    Ghost,
    /// Compact rounded toggle
    Chip,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Danger => "btn-danger",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Chip => "btn-chip",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Rendered in the pressed state (chips only)
    #[props(default = false)]
    pub active: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

fn button_class(variant: ButtonVariant, active: bool, extra: Option<&str>) -> String {
    let mut class = variant.class().to_string();
    if active {
        class.push_str(" active");
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Danger,
///         onclick: move |_| delete_post(id.clone()),
///         "Delete"
///     }
///
///     Button {
///         variant: ButtonVariant::Chip,
///         active: toggles.liked,
///         onclick: move |_| toggle(ToggleAction::Like),
///         "♥ {toggles.likes}"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.active, props.class.as_deref());
    let pressed = (props.variant == ButtonVariant::Chip).then_some(if props.active { "true" } else { "false" });

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            "aria-pressed": pressed,
            onclick: move |evt| {
                evt.stop_propagation();
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, dismiss)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("icon-btn {}", extra),
        _ => "icon-btn".to_string(),
    };

    rsx! {
        button {
            class: "{full_class}",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "btn-secondary");
        assert_eq!(ButtonVariant::Danger.class(), "btn-danger");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
        assert_eq!(ButtonVariant::Chip.class(), "btn-chip");
    }

    #[test]
    fn button_class_composition() {
        assert_eq!(button_class(ButtonVariant::Chip, true, None), "btn-chip active");
        assert_eq!(
            button_class(ButtonVariant::Ghost, false, Some("card-action")),
            "btn-ghost card-action"
        );
        assert_eq!(button_class(ButtonVariant::Primary, false, Some("")), "btn-primary");
    }
}
