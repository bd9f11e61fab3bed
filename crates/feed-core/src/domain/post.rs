use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::new_id;

/// Post entity - a user-authored feed entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub content: String,
    /// Image reference passed through as-is (URL or data URI).
    #[serde(default, alias = "image", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Ids of users who liked the post, in like order.
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with no likes and no comments.
    pub fn new(
        user_id: impl Into<String>,
        username: impl Into<String>,
        content: impl Into<String>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id: new_id(),
            user_id: user_id.into(),
            username: username.into(),
            content: content.into(),
            image_url,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|id| id == user_id)
    }

    /// Remove `user_id` from the likes if present, append it otherwise.
    ///
    /// Returns whether the user likes the post afterwards.
    pub fn toggle_like(&mut self, user_id: &str) -> bool {
        if self.is_liked_by(user_id) {
            self.likes.retain(|id| id != user_id);
            false
        } else {
            self.likes.push(user_id.to_string());
            true
        }
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}

/// Comment entity - append-only reply attached to a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(
        user_id: impl Into<String>,
        username: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id(),
            user_id: user_id.into(),
            username: username.into(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}
