//! Style posts - Midjourney `--sref` codes with example images

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Identified, UserSummary};

/// A user-submitted style reference
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StylePost {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    /// The numeric/style code passed as `--sref`
    pub sref_code: String,
    pub description: String,
    /// Example image URLs, first one is the cover
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub author: Option<UserSummary>,
    pub likes: u64,
    pub views: u64,
    pub favorites: u64,
    pub created_at: Option<DateTime<Utc>>,
}

impl StylePost {
    /// Cover image for cards
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Parameter string ready to paste into a prompt
    pub fn sref_parameter(&self) -> String {
        format!("--sref {}", self.sref_code.trim())
    }
}

impl Identified for StylePost {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Editable fields sent with `PUT /posts/:id`
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sref_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_from_mongo_document() {
        let post: StylePost = serde_json::from_str(
            r#"{
                "_id": "p1",
                "title": "Neon noir",
                "srefCode": "2846 ",
                "images": ["https://cdn/a.png", "https://cdn/b.png"],
                "author": {"_id": "u1", "username": "mika"},
                "likes": 3,
                "createdAt": "2024-03-01T10:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(post.id, "p1");
        assert_eq!(post.cover_image(), Some("https://cdn/a.png"));
        assert_eq!(post.sref_parameter(), "--sref 2846");
        assert_eq!(post.author.as_ref().map(|a| a.username.as_str()), Some("mika"));
        assert!(post.created_at.is_some());
    }

    #[test]
    fn test_update_skips_unset_fields() {
        let update = PostUpdate {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Renamed"}));
    }
}
