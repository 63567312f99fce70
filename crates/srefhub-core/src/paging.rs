//! Infinite list controller.
//!
//! Accumulates pages from a [`PageSource`] into one flat list,
//! deduplicated by id. The next page is requested when the sentinel at the
//! bottom of the list is visible, another page exists and no fetch is in
//! flight. Changing the query (filters, sort, debounced search) discards
//! everything and starts again from page 1.
//!
//! Fetching is split into [`InfiniteList::begin_next`] and
//! [`InfiniteList::complete`] so UI code can release its state handle while
//! the request is in flight. Responses carry the generation they were
//! issued under; anything from before the latest reset is dropped.

use std::collections::HashSet;
use std::fmt::Debug;
use std::future::Future;

use tracing::{debug, warn};

use crate::error::HubResult;
use crate::types::{Identified, Page, PageInfo};

/// Default distance below the viewport at which the sentinel triggers
pub const DEFAULT_SENTINEL_MARGIN_PX: u32 = 250;

/// Something that can fetch page `page` (1-based) of results for `query`.
pub trait PageSource<Q, T> {
    fn fetch_page(&self, query: &Q, page: u32) -> impl Future<Output = HubResult<Page<T>>> + Send;
}

/// Ticket for one in-flight page fetch
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest<Q> {
    pub query: Q,
    pub page: u32,
    generation: u64,
}

/// Accumulated list state for one query at a time
#[derive(Debug, Clone)]
pub struct InfiniteList<Q, T> {
    query: Q,
    items: Vec<T>,
    seen: HashSet<String>,
    next_page: Option<u32>,
    last_info: Option<PageInfo>,
    fetching: bool,
    sentinel_visible: bool,
    last_error: Option<String>,
    generation: u64,
}

impl<Q, T> InfiniteList<Q, T>
where
    Q: Clone + PartialEq + Debug,
    T: Identified + Clone,
{
    pub fn new(query: Q) -> Self {
        Self {
            query,
            items: Vec::new(),
            seen: HashSet::new(),
            next_page: Some(1),
            last_info: None,
            fetching: false,
            sentinel_visible: false,
            last_error: None,
            generation: 0,
        }
    }

    pub fn query(&self) -> &Q {
        &self.query
    }

    /// Flattened items across all loaded pages
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pagination of the most recent successful page
    pub fn last_info(&self) -> Option<PageInfo> {
        self.last_info
    }

    /// Total reported by the server for this query, if known
    pub fn total(&self) -> Option<u64> {
        self.last_info.map(|i| i.total)
    }

    pub fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }

    pub fn is_fetching_next_page(&self) -> bool {
        self.fetching
    }

    /// No page has completed successfully for the current query yet
    pub fn is_initial(&self) -> bool {
        self.last_info.is_none()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Switch to `query`. Returns `true` if it differed and the list was reset.
    pub fn set_query(&mut self, query: Q) -> bool {
        if query == self.query {
            return false;
        }
        debug!(?query, "Query changed, resetting list");
        self.query = query;
        self.reset();
        true
    }

    /// Drop all pages and start over from page 1 with the same query.
    pub fn reset(&mut self) {
        self.items.clear();
        self.seen.clear();
        self.next_page = Some(1);
        self.last_info = None;
        self.fetching = false;
        self.last_error = None;
        self.generation += 1;
    }

    /// Sentinel intersection changed.
    ///
    /// A fresh intersection re-arms fetching after a failed page.
    pub fn sentinel_changed(&mut self, visible: bool) {
        self.sentinel_visible = visible;
        if visible {
            self.last_error = None;
        }
    }

    /// Clear a failure so the next check fetches again.
    pub fn retry(&mut self) {
        self.last_error = None;
    }

    /// Whether a fetch should start now.
    ///
    /// The first page loads without waiting for the sentinel; later pages
    /// need it visible. After a failure nothing fetches until the sentinel
    /// re-intersects, [`retry`](Self::retry) is called or the query changes.
    pub fn should_fetch_next(&self) -> bool {
        (self.sentinel_visible || self.is_initial())
            && self.last_error.is_none()
            && self.has_next_page()
            && !self.fetching
    }

    /// Mark the next page as in flight and return its request.
    ///
    /// Returns `None` if a fetch is already running or no pages remain.
    pub fn begin_next(&mut self) -> Option<PageRequest<Q>> {
        if self.fetching {
            return None;
        }
        let page = self.next_page?;
        self.fetching = true;

        Some(PageRequest {
            query: self.query.clone(),
            page,
            generation: self.generation,
        })
    }

    /// Apply the outcome of `request`.
    ///
    /// Returns `false` if the request belonged to a query that has since
    /// been replaced; its result is discarded.
    pub fn complete(&mut self, request: PageRequest<Q>, result: HubResult<Page<T>>) -> bool {
        if request.generation != self.generation {
            debug!(page = request.page, "Discarding page for stale query");
            return false;
        }
        self.fetching = false;

        match result {
            Ok(page) => {
                let received = page.items.len();
                for item in page.items {
                    if self.seen.insert(item.id().to_string()) {
                        self.items.push(item);
                    }
                }
                // Servers that omit the page number report page 0
                let info = PageInfo {
                    page: page.info.page.max(request.page),
                    ..page.info
                };
                self.next_page = info.has_next().then_some(info.page + 1);
                self.last_info = Some(info);
                self.last_error = None;
                debug!(
                    page = request.page,
                    received,
                    total = self.items.len(),
                    "Page applied"
                );
            }
            Err(e) => {
                warn!(page = request.page, error = %e, "Page fetch failed");
                self.last_error = Some(e.to_string());
            }
        }
        true
    }

    /// Fetch and apply the next page from `source` in one step.
    ///
    /// Returns `true` if a page request was issued and applied.
    pub async fn fetch_next<S>(&mut self, source: &S) -> bool
    where
        S: PageSource<Q, T>,
    {
        let Some(request) = self.begin_next() else {
            return false;
        };
        let result = source.fetch_page(&request.query, request.page).await;
        self.complete(request, result)
    }
}
