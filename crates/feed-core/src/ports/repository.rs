use async_trait::async_trait;

use crate::domain::{Comment, Post};
use crate::error::RepoError;

/// Post repository - an ordered, newest-first feed.
///
/// Each mutating method is a single read-modify-write; implementations
/// must not let two of them interleave on the same post.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Every post, newest first.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Number of stored posts.
    async fn count(&self) -> Result<usize, RepoError>;

    /// Put a new post at the head of the feed.
    async fn prepend(&self, post: Post) -> Result<Post, RepoError>;

    /// Add or remove `user_id` from the post's likes.
    /// Fails with [`RepoError::NotFound`] if the post does not exist.
    async fn toggle_like(&self, post_id: &str, user_id: &str) -> Result<Post, RepoError>;

    /// Append a comment to the post.
    /// Fails with [`RepoError::NotFound`] if the post does not exist.
    async fn add_comment(&self, post_id: &str, comment: Comment) -> Result<Post, RepoError>;
}
