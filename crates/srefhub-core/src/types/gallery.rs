//! Gallery items - curated AI-generated images and videos with their prompts

use serde::{Deserialize, Serialize};

use super::Identified;

/// Kind of media a gallery item points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

/// One curated gallery entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryItem {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    /// Prompt text used to generate the media
    pub prompt: String,
    pub media_url: String,
    pub thumbnail_url: Option<String>,
    pub media_type: MediaType,
    /// Generating model, e.g. `midjourney`, `flux`, `sora`
    pub model: String,
    pub tags: Vec<String>,
    pub likes: u64,
    pub favorites: u64,
    pub copies: u64,
    /// Whether the current user liked this item
    pub is_liked: bool,
    /// Whether the current user favorited this item
    pub is_favorited: bool,
}

impl GalleryItem {
    /// URL to load in a card: the thumbnail when one exists
    pub fn preview_url(&self) -> &str {
        self.thumbnail_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(&self.media_url)
    }
}

impl Identified for GalleryItem {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_prefers_thumbnail() {
        let mut item = GalleryItem {
            media_url: "https://cdn/full.png".to_string(),
            ..Default::default()
        };
        assert_eq!(item.preview_url(), "https://cdn/full.png");

        item.thumbnail_url = Some("https://cdn/thumb.png".to_string());
        assert_eq!(item.preview_url(), "https://cdn/thumb.png");

        item.thumbnail_url = Some(String::new());
        assert_eq!(item.preview_url(), "https://cdn/full.png");
    }

    #[test]
    fn test_video_item() {
        let item: GalleryItem = serde_json::from_str(
            r#"{"_id":"g1","mediaType":"video","mediaUrl":"https://cdn/v.mp4","isLiked":true}"#,
        )
        .unwrap();
        assert_eq!(item.media_type, MediaType::Video);
        assert!(item.is_liked);
        assert!(!item.is_favorited);
    }
}
