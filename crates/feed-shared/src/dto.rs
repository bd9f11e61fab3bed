//! Data Transfer Objects - request bodies for the posts API.
//!
//! Request fields are all optional on the wire so that a missing field is
//! reported by name instead of as a generic decode failure. `validate`
//! turns a request into its checked counterpart.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every problem found in one request body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .0.join(", "))]
pub struct ValidationErrors(pub Vec<String>);

/// POST /api/posts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
}

/// A checked [`CreatePostRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub user_id: String,
    pub username: String,
    pub content: String,
    pub image_url: Option<String>,
}

impl CreatePostRequest {
    pub fn validate(self) -> Result<NewPost, ValidationErrors> {
        let mut errors = Vec::new();
        let user_id = required("userId", self.user_id, &mut errors);
        let username = required("username", self.username, &mut errors);
        let content = required("content", self.content, &mut errors);

        finish(errors, || NewPost {
            user_id,
            username,
            content,
            image_url: self
                .image_url
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
        })
    }
}

/// PUT /api/posts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleLikeRequest {
    pub post_id: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeToggle {
    pub post_id: String,
    pub user_id: String,
}

impl ToggleLikeRequest {
    pub fn validate(self) -> Result<LikeToggle, ValidationErrors> {
        let mut errors = Vec::new();
        let post_id = required("postId", self.post_id, &mut errors);
        let user_id = required("userId", self.user_id, &mut errors);

        finish(errors, || LikeToggle { post_id, user_id })
    }
}

/// PATCH /api/posts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    pub post_id: Option<String>,
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: String,
    pub user_id: String,
    pub username: String,
    pub content: String,
}

impl AddCommentRequest {
    pub fn validate(self) -> Result<NewComment, ValidationErrors> {
        let mut errors = Vec::new();
        let post_id = required("postId", self.post_id, &mut errors);
        let user_id = required("userId", self.user_id, &mut errors);
        let username = required("username", self.username, &mut errors);
        let content = required("content", self.content, &mut errors);

        finish(errors, || NewComment {
            post_id,
            user_id,
            username,
            content,
        })
    }
}

/// Trimmed value of a required field; records an error when missing or blank.
fn required(field: &str, value: Option<String>, errors: &mut Vec<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        Some(_) => {
            errors.push(format!("{field} must not be blank"));
            String::new()
        }
        None => {
            errors.push(format!("{field} is required"));
            String::new()
        }
    }
}

fn finish<T>(errors: Vec<String>, build: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
    if errors.is_empty() {
        Ok(build())
    } else {
        Err(ValidationErrors(errors))
    }
}
