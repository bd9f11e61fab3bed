//! In-memory post repository - the server-side feed.
//!
//! Posts live for the lifetime of the process and are lost on restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use feed_core::domain::{Comment, Post};
use feed_core::error::RepoError;
use feed_core::ports::PostRepository;

/// Newest-first sequence of posts behind an async RwLock.
///
/// Every mutation holds the write guard for its whole read-modify-write.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Start from an existing newest-first sequence.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    async fn update<F>(&self, post_id: &str, apply: F) -> Result<Post, RepoError>
    where
        F: FnOnce(&mut Post) + Send,
    {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(RepoError::NotFound)?;

        apply(post);
        Ok(post.clone())
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn count(&self) -> Result<usize, RepoError> {
        Ok(self.posts.read().await.len())
    }

    async fn prepend(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        posts.insert(0, post.clone());

        tracing::debug!(post_id = %post.id, total = posts.len(), "Post added");
        Ok(post)
    }

    async fn toggle_like(&self, post_id: &str, user_id: &str) -> Result<Post, RepoError> {
        self.update(post_id, |post| {
            let liked = post.toggle_like(user_id);
            tracing::debug!(post_id = %post.id, user_id, liked, "Like toggled");
        })
        .await
    }

    async fn add_comment(&self, post_id: &str, comment: Comment) -> Result<Post, RepoError> {
        self.update(post_id, |post| {
            tracing::debug!(post_id = %post.id, comment_id = %comment.id, "Comment added");
            post.add_comment(comment);
        })
        .await
    }
}
