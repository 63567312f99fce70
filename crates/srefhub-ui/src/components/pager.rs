//! Pager - previous/next controls for numbered pages.

use dioxus::prelude::*;
use srefhub_core::dashboard::PageState;

use super::{Button, ButtonVariant};

/// "Page 2 of 5 (93 items)"
pub fn page_summary(state: &PageState) -> String {
    let noun = if state.total == 1 { "item" } else { "items" };
    format!(
        "Page {} of {} ({} {})",
        state.current_page, state.total_pages, state.total, noun
    )
}

/// Previous/next buttons around a page summary.
///
/// Buttons are disabled at the ends and while a page is loading.
#[component]
pub fn Pager(state: PageState, on_change: EventHandler<u32>) -> Element {
    if state.total_pages <= 1 {
        return rsx! {};
    }

    let current = state.current_page;
    let summary = page_summary(&state);

    rsx! {
        nav { class: "pager", "aria-label": "Pagination",
            Button {
                variant: ButtonVariant::Secondary,
                disabled: state.loading || !state.has_prev(),
                onclick: move |_| on_change.call(current.saturating_sub(1)),
                "\u{2190} Prev"
            }
            span { class: "pager-summary",
                if state.loading { "Loading..." } else { "{summary}" }
            }
            Button {
                variant: ButtonVariant::Secondary,
                disabled: state.loading || !state.has_next(),
                onclick: move |_| on_change.call(current + 1),
                "Next \u{2192}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_text() {
        let state = PageState {
            current_page: 2,
            total_pages: 5,
            total: 93,
            loading: false,
        };
        assert_eq!(page_summary(&state), "Page 2 of 5 (93 items)");

        let single = PageState {
            total: 1,
            ..PageState::first()
        };
        assert_eq!(page_summary(&single), "Page 1 of 1 (1 item)");
    }
}
