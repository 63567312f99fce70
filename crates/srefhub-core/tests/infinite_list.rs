//! Infinite list controller driven by an in-memory page source
//!
//! Exercises the async `fetch_next` path the way the gallery and explore
//! pages use it: filters, refetches and failures.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use srefhub_core::api::{GalleryQuery, GallerySort};
use srefhub_core::paging::{InfiniteList, PageSource};
use srefhub_core::types::{GalleryItem, Page, PageInfo};
use srefhub_core::{HubError, HubResult};

// ============================================================================
// Test Utilities
// ============================================================================

/// Serves `per_page` items per page; ids encode the model filter so results
/// from different queries are distinguishable.
struct FakeGallery {
    per_page: usize,
    total: usize,
    calls: AtomicUsize,
    fail_pages: Mutex<Vec<u32>>,
}

impl FakeGallery {
    fn new(per_page: usize, total: usize) -> Self {
        Self {
            per_page,
            total,
            calls: AtomicUsize::new(0),
            fail_pages: Mutex::new(Vec::new()),
        }
    }

    fn fail_once(&self, page: u32) {
        self.fail_pages.lock().unwrap().push(page);
    }
}

impl PageSource<GalleryQuery, GalleryItem> for FakeGallery {
    async fn fetch_page(&self, query: &GalleryQuery, page: u32) -> HubResult<Page<GalleryItem>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        {
            let mut fail = self.fail_pages.lock().unwrap();
            if let Some(pos) = fail.iter().position(|p| *p == page) {
                fail.remove(pos);
                return Err(HubError::Network("connection reset".into()));
            }
        }

        let prefix = query.model.clone().unwrap_or_else(|| "any".to_string());
        let start = (page as usize - 1) * self.per_page;
        let end = (start + self.per_page).min(self.total);
        let items = (start..end)
            .map(|i| GalleryItem {
                id: format!("{}-{}", prefix, i),
                model: prefix.clone(),
                ..Default::default()
            })
            .collect();
        let total_pages = self.total.div_ceil(self.per_page) as u32;

        Ok(Page::new(
            items,
            PageInfo {
                page,
                total_pages,
                total: self.total as u64,
            },
        ))
    }
}

fn query(model: Option<&str>) -> GalleryQuery {
    GalleryQuery::new(model.map(String::from), None, GallerySort::Latest, None)
}

fn ids(list: &InfiniteList<GalleryQuery, GalleryItem>) -> Vec<String> {
    list.items().iter().map(|i| i.id.clone()).collect()
}

// ============================================================================
// Accumulation
// ============================================================================

#[tokio::test]
async fn test_pages_accumulate_until_exhausted() {
    let source = FakeGallery::new(4, 10);
    let mut list = InfiniteList::new(query(None));

    assert!(list.fetch_next(&source).await);
    assert_eq!(list.len(), 4);

    list.sentinel_changed(true);
    while list.should_fetch_next() {
        list.fetch_next(&source).await;
    }

    assert_eq!(list.len(), 10);
    assert!(!list.has_next_page());
    assert_eq!(list.total(), Some(10));
    assert_eq!(source.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_refetching_same_page_adds_no_duplicates() {
    let source = FakeGallery::new(5, 20);
    let mut list = InfiniteList::new(query(Some("flux")));

    let first = list.begin_next().unwrap();
    let again = first.clone();
    let result = source.fetch_page(&first.query, first.page).await;
    list.complete(first, result);

    // Same (page, filters) tuple delivered a second time
    let result = source.fetch_page(&again.query, again.page).await;
    list.complete(again, result);

    let got = ids(&list);
    let mut unique = got.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(got.len(), 5);
    assert_eq!(unique.len(), got.len());
}

// ============================================================================
// Filter Changes
// ============================================================================

#[tokio::test]
async fn test_filter_change_resets_to_first_page_only() {
    let source = FakeGallery::new(3, 9);
    let mut list = InfiniteList::new(query(Some("midjourney")));
    list.sentinel_changed(true);
    list.fetch_next(&source).await;
    list.fetch_next(&source).await;
    assert_eq!(list.len(), 6);

    assert!(list.set_query(query(Some("sora"))));
    assert!(list.is_empty());
    assert!(list.should_fetch_next());

    list.fetch_next(&source).await;
    assert_eq!(ids(&list), vec!["sora-0", "sora-1", "sora-2"]);
}

#[tokio::test]
async fn test_response_for_old_filter_is_ignored() {
    let source = FakeGallery::new(3, 9);
    let mut list = InfiniteList::new(query(Some("midjourney")));

    let stale = list.begin_next().unwrap();
    let stale_result = source.fetch_page(&stale.query, stale.page).await;

    list.set_query(query(Some("flux")));
    let fresh = list.begin_next().unwrap();
    let fresh_result = source.fetch_page(&fresh.query, fresh.page).await;

    assert!(list.complete(fresh, fresh_result));
    assert!(!list.complete(stale, stale_result));
    assert!(ids(&list).iter().all(|id| id.starts_with("flux-")));
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_failed_page_is_retried_on_next_intersection() {
    let source = FakeGallery::new(2, 6);
    let mut list = InfiniteList::new(query(None));
    list.fetch_next(&source).await;
    list.sentinel_changed(true);

    source.fail_once(2);
    list.fetch_next(&source).await;
    assert_eq!(list.len(), 2);
    assert!(list.has_next_page());
    assert!(!list.should_fetch_next());

    // Sentinel scrolls out and back in
    list.sentinel_changed(false);
    list.sentinel_changed(true);
    assert!(list.should_fetch_next());
    list.fetch_next(&source).await;
    assert_eq!(list.len(), 4);
    assert!(list.last_error().is_none());
}
