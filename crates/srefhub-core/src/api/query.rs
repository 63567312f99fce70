//! List query parameters.
//!
//! Each query is the full parameter tuple of a list; the infinite list
//! controller resets whenever it changes, so equality must cover every
//! field that reaches the server.

use std::fmt;
use std::str::FromStr;

use crate::error::HubError;

/// Sort orders offered by `/gallery`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GallerySort {
    #[default]
    Latest,
    Popular,
    MostCopied,
}

impl GallerySort {
    pub const ALL: [GallerySort; 3] = [GallerySort::Latest, GallerySort::Popular, GallerySort::MostCopied];

    pub fn as_str(&self) -> &'static str {
        match self {
            GallerySort::Latest => "latest",
            GallerySort::Popular => "popular",
            GallerySort::MostCopied => "copies",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GallerySort::Latest => "Latest",
            GallerySort::Popular => "Popular",
            GallerySort::MostCopied => "Most copied",
        }
    }
}

/// Sort orders offered by `/posts` and `/prompts`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PostSort {
    #[default]
    Newest,
    Popular,
    MostViewed,
}

impl PostSort {
    pub const ALL: [PostSort; 3] = [PostSort::Newest, PostSort::Popular, PostSort::MostViewed];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostSort::Newest => "newest",
            PostSort::Popular => "popular",
            PostSort::MostViewed => "views",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PostSort::Newest => "Newest",
            PostSort::Popular => "Popular",
            PostSort::MostViewed => "Most viewed",
        }
    }
}

macro_rules! parse_sort {
    ($ty:ident) => {
        impl FromStr for $ty {
            type Err = HubError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL
                    .into_iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| HubError::InvalidInput(format!("unknown sort '{}'", s)))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

parse_sort!(GallerySort);
parse_sort!(PostSort);

/// Trim and drop empty filter values
fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Filters for the gallery list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GalleryQuery {
    pub model: Option<String>,
    pub tag: Option<String>,
    pub sort: GallerySort,
    pub search: Option<String>,
}

impl GalleryQuery {
    pub fn new(model: Option<String>, tag: Option<String>, sort: GallerySort, search: Option<String>) -> Self {
        Self {
            model: clean(model),
            tag: clean(tag),
            sort,
            search: clean(search),
        }
    }

    /// Query-string pairs for `GET /gallery`
    pub fn params(&self, page: u32, limit: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("sort", self.sort.as_str().to_string()),
            ("page", page.to_string()),
            ("limit", limit.to_string()),
        ];
        if let Some(model) = &self.model {
            params.push(("model", model.clone()));
        }
        if let Some(tag) = &self.tag {
            params.push(("tag", tag.clone()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        params
    }
}

/// Filters for style post and prompt lists
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PostQuery {
    pub author: Option<String>,
    pub sort: PostSort,
    pub search: Option<String>,
}

impl PostQuery {
    pub fn new(author: Option<String>, sort: PostSort, search: Option<String>) -> Self {
        Self {
            author: clean(author),
            sort,
            search: clean(search),
        }
    }

    /// Posts by one author, newest first
    pub fn by_author(author: impl Into<String>) -> Self {
        Self::new(Some(author.into()), PostSort::Newest, None)
    }

    /// Query-string pairs for `GET /posts` and `GET /prompts`
    pub fn params(&self, page: u32, limit: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("sort", self.sort.as_str().to_string()),
            ("page", page.to_string()),
            ("limit", limit.to_string()),
        ];
        if let Some(author) = &self.author {
            params.push(("author", author.clone()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_filters_are_dropped() {
        let q = GalleryQuery::new(Some("  ".into()), Some(" anime ".into()), GallerySort::Popular, Some(String::new()));
        assert_eq!(q.model, None);
        assert_eq!(q.tag.as_deref(), Some("anime"));
        assert_eq!(q.search, None);
        assert_eq!(q, GalleryQuery::new(None, Some("anime".into()), GallerySort::Popular, None));
    }

    #[test]
    fn test_gallery_params() {
        let q = GalleryQuery::new(Some("flux".into()), None, GallerySort::MostCopied, Some("cat".into()));
        let params = q.params(2, 24);
        assert!(params.contains(&("sort", "copies".to_string())));
        assert!(params.contains(&("page", "2".to_string())));
        assert!(params.contains(&("limit", "24".to_string())));
        assert!(params.contains(&("model", "flux".to_string())));
        assert!(params.contains(&("search", "cat".to_string())));
        assert!(!params.iter().any(|(k, _)| *k == "tag"));
    }

    #[test]
    fn test_sort_parsing() {
        assert_eq!("Popular".parse::<GallerySort>().unwrap(), GallerySort::Popular);
        assert_eq!("views".parse::<PostSort>().unwrap(), PostSort::MostViewed);
        assert!("random".parse::<PostSort>().is_err());
    }

    #[test]
    fn test_by_author() {
        let q = PostQuery::by_author("u42");
        let params = q.params(1, 10);
        assert!(params.contains(&("author", "u42".to_string())));
        assert!(params.contains(&("sort", "newest".to_string())));
    }
}
