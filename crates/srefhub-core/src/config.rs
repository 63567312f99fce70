//! Client configuration.
//!
//! Defaults can be overridden from the environment (`SREFHUB_*`) and then
//! from command-line flags in the binaries.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use tracing::{info, warn};

use crate::debounce::DEFAULT_SEARCH_DEBOUNCE;
use crate::error::{HubError, HubResult};
use crate::layout::GridMetrics;
use crate::lazy::DEFAULT_REVEAL_MARGIN_PX;
use crate::paging::DEFAULT_SENTINEL_MARGIN_PX;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the REST API, without trailing slash
    pub api_url: String,
    /// Global HTTP timeout applied to every request
    pub timeout: Duration,
    /// Items requested per page
    pub page_size: u32,
    /// Masonry grid track sizes
    pub grid: GridMetrics,
    /// Cards start loading this far outside the viewport
    pub reveal_margin_px: u32,
    /// Next page is requested when the sentinel is this close
    pub sentinel_margin_px: u32,
    /// Quiet period before search text is applied
    pub search_debounce: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_size: DEFAULT_PAGE_SIZE,
            grid: GridMetrics::default(),
            reveal_margin_px: DEFAULT_REVEAL_MARGIN_PX,
            sentinel_margin_px: DEFAULT_SENTINEL_MARGIN_PX,
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with `SREFHUB_API_URL`, `SREFHUB_TIMEOUT_SECS`
    /// and `SREFHUB_PAGE_SIZE`. Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: var("SREFHUB_API_URL").unwrap_or(defaults.api_url),
            timeout: try_load("SREFHUB_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            page_size: try_load("SREFHUB_PAGE_SIZE", DEFAULT_PAGE_SIZE).unwrap_or(defaults.page_size),
            ..defaults
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// API base with any trailing slash removed
    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    pub fn validate(&self) -> HubResult<()> {
        let url = self.base_url();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(HubError::Config(format!(
                "API URL must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }
        if self.page_size == 0 {
            return Err(HubError::Config("page size must be at least 1".to_string()));
        }
        if self.grid.row_height_px <= 0.0 {
            return Err(HubError::Config("grid row height must be positive".to_string()));
        }
        Ok(())
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn try_load<T>(key: &str, default: T) -> Option<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match var(key) {
        None => {
            info!("{key} not set, using default: {default}");
            Some(default)
        }
        Some(raw) => match raw.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Invalid {key} value '{raw}': {e}, using default");
                None
            }
        },
    }
}
