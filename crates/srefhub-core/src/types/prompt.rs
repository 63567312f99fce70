//! Prompts - generation prompt text with category/difficulty metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Identified, UserSummary};

/// How much prompt-craft experience a prompt assumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

/// A user-submitted prompt, independent of style posts
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Prompt {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub author: Option<UserSummary>,
    pub likes: u64,
    pub favorites: u64,
    pub created_at: Option<DateTime<Utc>>,
}

impl Identified for Prompt {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_defaults() {
        let prompt: Prompt =
            serde_json::from_str(r#"{"id":"pr1","content":"a fox in the snow"}"#).unwrap();
        assert_eq!(prompt.id, "pr1");
        assert_eq!(prompt.difficulty, Difficulty::Beginner);
        assert!(prompt.tags.is_empty());
    }

    #[test]
    fn test_difficulty_wire_format() {
        let d: Difficulty = serde_json::from_str(r#""advanced""#).unwrap();
        assert_eq!(d, Difficulty::Advanced);
        assert_eq!(d.to_string(), "advanced");
    }
}
