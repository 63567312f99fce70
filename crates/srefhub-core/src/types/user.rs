//! User types - public profile summaries and dashboard statistics

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Identified;

/// Public profile summary embedded in posts and follow lists
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSummary {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub username: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
}

impl UserSummary {
    /// Name to render; falls back to a shortened id for accounts without one.
    pub fn display_name(&self) -> String {
        if self.username.trim().is_empty() {
            let short: String = self.id.chars().take(8).collect();
            format!("user_{}", short)
        } else {
            self.username.clone()
        }
    }
}

impl Identified for UserSummary {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Aggregate statistics from `GET /users/:id/stats`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub total_posts: u64,
    pub total_likes: u64,
    pub total_views: u64,
    pub total_followers: u64,
    pub total_following: u64,
    /// Per-format breakdown of style posts (free-form server object)
    pub format_reference: BTreeMap<String, serde_json::Value>,
    /// Prompt statistics (free-form server object)
    pub prompts: BTreeMap<String, serde_json::Value>,
}

impl UserStats {
    /// Prompt count reported under `prompts.total`, if any.
    pub fn total_prompts(&self) -> u64 {
        self.prompts
            .get("total")
            .and_then(serde_json::Value::as_u64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_from_partial_json() {
        let stats: UserStats = serde_json::from_str(
            r#"{"totalPosts":4,"totalFollowers":12,"prompts":{"total":7,"public":5}}"#,
        )
        .unwrap();
        assert_eq!(stats.total_posts, 4);
        assert_eq!(stats.total_followers, 12);
        assert_eq!(stats.total_likes, 0);
        assert_eq!(stats.total_prompts(), 7);
        assert!(stats.format_reference.is_empty());
    }

    #[test]
    fn test_display_name_fallback() {
        let user = UserSummary {
            id: "65f1c0ffee".to_string(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "user_65f1c0ff");
    }
}
