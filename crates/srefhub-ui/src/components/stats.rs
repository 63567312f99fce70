//! Stat boxes - headline numbers on the dashboard.

use dioxus::prelude::*;

/// Compact display for large counts: 999, 1.2K, 3.4M
pub fn format_count(value: u64) -> String {
    match value {
        0..=999 => value.to_string(),
        1_000..=999_999 => trim_decimal(value as f64 / 1_000.0, "K"),
        _ => trim_decimal(value as f64 / 1_000_000.0, "M"),
    }
}

fn trim_decimal(value: f64, suffix: &str) -> String {
    let text = format!("{:.1}", value);
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{}{}", text, suffix)
}

/// A single labelled number.
#[component]
pub fn StatBox(value: u64, label: String) -> Element {
    let shown = format_count(value);
    rsx! {
        div { class: "stat-box",
            div { class: "stat-value", title: "{value}", "{shown}" }
            div { class: "stat-label", "{label}" }
        }
    }
}

/// Props for the stats grid.
#[derive(Props, Clone, PartialEq)]
pub struct StatsGridProps {
    /// Section heading
    pub title: String,
    /// (label, value) pairs in display order
    pub stats: Vec<(String, u64)>,
    #[props(default)]
    pub subtitle: Option<String>,
}

/// Headed grid of stat boxes.
#[component]
pub fn StatsGrid(props: StatsGridProps) -> Element {
    rsx! {
        div { class: "stats-section",
            h2 { class: "section-title", "{props.title}" }
            if let Some(subtitle) = &props.subtitle {
                p { class: "subtitle", "{subtitle}" }
            }

            div { class: "stats-grid",
                for (label, value) in props.stats.iter() {
                    StatBox { key: "{label}", value: *value, label: label.clone() }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_abbreviated() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1K");
        assert_eq!(format_count(1_240), "1.2K");
        assert_eq!(format_count(48_900), "48.9K");
        assert_eq!(format_count(3_400_000), "3.4M");
    }
}
