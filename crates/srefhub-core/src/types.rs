//! Core types for SrefHub
//!
//! Entities mirror the JSON documents served by the gallery backend
//! (Mongo `_id` keys, camelCase fields). Pagination comes back in two
//! shapes depending on the endpoint; both normalize into [`PageInfo`].

pub mod gallery;
pub mod post;
pub mod prompt;
pub mod user;

pub use gallery::{GalleryItem, MediaType};
pub use post::{PostUpdate, StylePost};
pub use prompt::{Difficulty, Prompt};
pub use user::{UserStats, UserSummary};

use serde::{Deserialize, Serialize};

/// Anything that can be deduplicated in an accumulated list.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Normalized pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageInfo {
    /// 1-based page number this result represents
    pub page: u32,
    /// Total number of pages for the current query
    pub total_pages: u32,
    /// Total number of items across all pages
    pub total: u64,
}

impl PageInfo {
    /// Whether another page follows this one
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// `{ current, pages, total }` as returned by `/posts` and `/prompts`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CursorPagination {
    #[serde(default)]
    pub current: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub total: u64,
}

impl From<CursorPagination> for PageInfo {
    fn from(p: CursorPagination) -> Self {
        Self {
            page: p.current,
            total_pages: p.pages,
            total: p.total,
        }
    }
}

/// `{ page, totalPages, total }` as returned by `/gallery`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPagination {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total: u64,
}

impl From<GalleryPagination> for PageInfo {
    fn from(p: GalleryPagination) -> Self {
        Self {
            page: p.page,
            total_pages: p.total_pages,
            total: p.total,
        }
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub info: PageInfo,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, info: PageInfo) -> Self {
        Self { items, info }
    }

    /// A page with no items and no follow-up pages
    pub fn empty(page: u32) -> Self {
        Self {
            items: Vec::new(),
            info: PageInfo {
                page,
                total_pages: page.saturating_sub(1),
                total: 0,
            },
        }
    }
}
