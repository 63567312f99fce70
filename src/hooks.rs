//! Hooks bridging the webview and `srefhub_core` state.
//!
//! - [`observe_visibility`] attaches an IntersectionObserver to a DOM id
//! - [`use_infinite_list`] drives an [`InfiniteList`] from a query memo
//! - [`use_debounced_text`] turns keystrokes into settled search text

use std::fmt::Debug;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use srefhub_core::{Debouncer, Identified, InfiniteList, PageSource};

use crate::context::{use_api, use_feedback};

const VISIBILITY_JS: &str = r#"
const target = document.getElementById("__ID__");
if (target) {
    const observer = new IntersectionObserver((entries) => {
        for (const entry of entries) {
            dioxus.send(entry.isIntersecting);
            if (entry.isIntersecting && __ONCE__) {
                observer.disconnect();
            }
        }
    }, { rootMargin: "__MARGIN__px 0px" });
    observer.observe(target);
}
await new Promise(() => {});
"#;

/// Observer script for `element_id`. With `once` the observer disconnects
/// after the first visible report.
pub fn visibility_script(element_id: &str, margin_px: u32, once: bool) -> String {
    VISIBILITY_JS
        .replace("__ID__", element_id)
        .replace("__MARGIN__", &margin_px.to_string())
        .replace("__ONCE__", if once { "true" } else { "false" })
}

/// Watch `element_id` and call `on_change` with every intersection change.
///
/// Call from `onmounted` so the element exists. The task lives as long as
/// the calling component.
pub fn observe_visibility(
    element_id: String,
    margin_px: u32,
    once: bool,
    mut on_change: impl FnMut(bool) + 'static,
) {
    spawn(async move {
        let mut eval = document::eval(&visibility_script(&element_id, margin_px, once));
        loop {
            match eval.recv::<bool>().await {
                Ok(visible) => on_change(visible),
                Err(e) => {
                    tracing::debug!(element = %element_id, error = ?e, "Visibility observer closed");
                    break;
                }
            }
        }
    });
}

/// Infinite list bound to `query`.
///
/// A query change resets the list. Whenever the list says a fetch is due
/// (first page, or sentinel visible), the next page is requested without
/// holding the signal across the await; failures toast once and wait for
/// the sentinel to re-intersect.
pub fn use_infinite_list<Q, T>(query: Memo<Q>) -> Signal<InfiniteList<Q, T>>
where
    Q: Clone + PartialEq + Debug + 'static,
    T: Identified + Clone + 'static,
    srefhub_core::ApiClient: PageSource<Q, T>,
{
    let api = use_api();
    let feedback = use_feedback();
    let mut list = use_signal(|| InfiniteList::new(query.peek().clone()));

    use_effect(move || {
        let query = query();
        if list.peek().query() != &query {
            list.write().set_query(query);
        }
    });

    use_effect(move || {
        if !list.read().should_fetch_next() {
            return;
        }
        let Some(request) = list.write().begin_next() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            let result = api.fetch_page(&request.query, request.page).await;
            if let Err(e) = &result {
                feedback.error("Could not load more", e);
            }
            list.write().complete(request, result);
        });
    });

    list
}

/// Text input whose settled value lags keystrokes by `delay`.
#[derive(Clone)]
pub struct DebouncedText {
    /// Last value that survived the quiet period
    pub settled: Signal<String>,
    debouncer: Rc<Debouncer<String>>,
}

impl DebouncedText {
    pub fn push(&self, value: String) {
        self.debouncer.push(value);
    }
}

pub fn use_debounced_text(delay: Duration) -> DebouncedText {
    let mut settled = use_signal(String::new);
    use_hook(move || {
        let (debouncer, mut rx) = Debouncer::new(delay);
        spawn(async move {
            while let Some(value) = rx.recv().await {
                tracing::debug!(%value, "Search settled");
                settled.set(value);
            }
        });
        DebouncedText {
            settled,
            debouncer: Rc::new(debouncer),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_substitutes_placeholders() {
        let js = visibility_script("card-g1", 200, true);
        assert!(js.contains(r#"getElementById("card-g1")"#));
        assert!(js.contains(r#"rootMargin: "200px 0px""#));
        assert!(js.contains("isIntersecting && true"));
        assert!(!js.contains("__"));
    }
}
