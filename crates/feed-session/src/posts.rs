use std::sync::Arc;

use tokio::sync::RwLock;

use feed_core::domain::{Comment, Post};
use feed_core::error::StorageError;
use feed_core::ports::KeyValueStore;

use crate::storage::{POSTS_KEY, read_json, write_json};

/// The locally kept feed, newest first.
///
/// Operations never validate their input: callers are trusted to pass the
/// signed-in user's id and non-empty content.
pub struct PostStore {
    storage: Arc<dyn KeyValueStore>,
    posts: RwLock<Vec<Post>>,
}

impl PostStore {
    /// Rehydrate from storage; a missing or malformed feed starts empty.
    pub async fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let posts: Vec<Post> = read_json(storage.as_ref(), POSTS_KEY)
            .await
            .unwrap_or_default();
        tracing::debug!(count = posts.len(), "Posts loaded");

        Self {
            storage,
            posts: RwLock::new(posts),
        }
    }

    pub async fn posts(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    pub async fn find(&self, post_id: &str) -> Option<Post> {
        self.posts
            .read()
            .await
            .iter()
            .find(|p| p.id == post_id)
            .cloned()
    }

    pub async fn add_post(
        &self,
        content: &str,
        user_id: &str,
        username: &str,
        image_url: Option<String>,
    ) -> Result<Post, StorageError> {
        let post = Post::new(user_id, username, content, image_url);

        self.commit(|posts| {
            let mut next = Vec::with_capacity(posts.len() + 1);
            next.push(post.clone());
            next.extend_from_slice(posts);
            next
        })
        .await?;

        tracing::info!(post_id = %post.id, user_id, "Post created");
        Ok(post)
    }

    /// Replace the content of `post_id`. Returns the edited post, if any.
    pub async fn edit_post(&self, post_id: &str, content: &str) -> Result<Option<Post>, StorageError> {
        self.update(post_id, |post| post.content = content.to_string())
            .await
    }

    pub async fn delete_post(&self, post_id: &str) -> Result<(), StorageError> {
        self.commit(|posts| posts.iter().filter(|p| p.id != post_id).cloned().collect())
            .await?;
        tracing::info!(post_id, "Post deleted");
        Ok(())
    }

    pub async fn toggle_like(&self, post_id: &str, user_id: &str) -> Result<Option<Post>, StorageError> {
        self.update(post_id, |post| {
            post.toggle_like(user_id);
        })
        .await
    }

    pub async fn add_comment(
        &self,
        post_id: &str,
        content: &str,
        user_id: &str,
        username: &str,
    ) -> Result<Option<Post>, StorageError> {
        let comment = Comment::new(user_id, username, content);
        self.update(post_id, |post| post.add_comment(comment.clone()))
            .await
    }

    /// Map over the feed, applying `apply` to every post with a matching id.
    /// Returns the first post that changed.
    async fn update<F>(&self, post_id: &str, apply: F) -> Result<Option<Post>, StorageError>
    where
        F: Fn(&mut Post),
    {
        let mut updated = None;

        self.commit(|posts| {
            posts
                .iter()
                .map(|post| {
                    let mut post = post.clone();
                    if post.id == post_id {
                        apply(&mut post);
                        updated.get_or_insert_with(|| post.clone());
                    }
                    post
                })
                .collect()
        })
        .await?;

        Ok(updated)
    }

    /// Derive the next feed from the current one, write it to storage, then
    /// swap it into memory. The lock is held throughout, so storage and
    /// memory never disagree once this returns.
    async fn commit<F>(&self, transform: F) -> Result<(), StorageError>
    where
        F: FnOnce(&[Post]) -> Vec<Post>,
    {
        let mut posts = self.posts.write().await;
        let next = transform(&posts);

        write_json(self.storage.as_ref(), POSTS_KEY, &next).await?;
        *posts = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use feed_infra::InMemoryStorage;

    use super::*;

    async fn store() -> (Arc<dyn KeyValueStore>, PostStore) {
        let storage: Arc<dyn KeyValueStore> = Arc::new(InMemoryStorage::new());
        let store = PostStore::load(storage.clone()).await;
        (storage, store)
    }

    async fn stored_posts(storage: &Arc<dyn KeyValueStore>) -> Vec<Post> {
        let raw = storage.get(POSTS_KEY).await.unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[tokio::test]
    async fn test_add_post_prepends() {
        let (_, store) = store().await;
        let first = store.add_post("one", "u1", "alice", None).await.unwrap();
        let second = store.add_post("two", "u1", "alice", None).await.unwrap();
        let third = store.add_post("three", "u2", "bob", None).await.unwrap();

        let ids: Vec<_> = store.posts().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);
    }

    #[tokio::test]
    async fn test_storage_matches_memory_after_every_operation() {
        let (storage, store) = store().await;

        let a = store.add_post("a", "u1", "alice", None).await.unwrap();
        assert_eq!(stored_posts(&storage).await, store.posts().await);

        let b = store
            .add_post("b", "u2", "bob", Some("https://img.example/b.png".into()))
            .await
            .unwrap();
        store.edit_post(&a.id, "a, edited").await.unwrap();
        assert_eq!(stored_posts(&storage).await, store.posts().await);

        store.toggle_like(&b.id, "u1").await.unwrap();
        store.add_comment(&b.id, "nice", "u1", "alice").await.unwrap();
        assert_eq!(stored_posts(&storage).await, store.posts().await);

        store.delete_post(&a.id).await.unwrap();
        assert_eq!(stored_posts(&storage).await, store.posts().await);
        assert_eq!(store.posts().await.len(), 1);
    }

    #[tokio::test]
    async fn test_toggle_like_twice_is_identity() {
        let (_, store) = store().await;
        let post = store.add_post("hi", "u1", "alice", None).await.unwrap();

        let liked = store.toggle_like(&post.id, "u2").await.unwrap().unwrap();
        assert_eq!(liked.likes, vec!["u2"]);
        let unliked = store.toggle_like(&post.id, "u2").await.unwrap().unwrap();
        assert!(unliked.likes.is_empty());
    }

    #[tokio::test]
    async fn test_edit_unknown_post_changes_nothing() {
        let (_, store) = store().await;
        store.add_post("hi", "u1", "alice", None).await.unwrap();
        let before = store.posts().await;

        assert_eq!(store.edit_post("nope", "changed").await.unwrap(), None);
        assert_eq!(store.posts().await, before);
    }

    #[tokio::test]
    async fn test_duplicate_ids_change_together() {
        let storage: Arc<dyn KeyValueStore> = Arc::new(InMemoryStorage::new());
        let twin = Post::new("u1", "alice", "double submit", None);
        let other = Post::new("u2", "bob", "unrelated", None);
        let seeded = vec![twin.clone(), twin.clone(), other.clone()];
        storage
            .set(POSTS_KEY, &serde_json::to_string(&seeded).unwrap())
            .await
            .unwrap();
        let store = PostStore::load(storage.clone()).await;

        store.edit_post(&twin.id, "edited").await.unwrap();
        store.toggle_like(&twin.id, "u2").await.unwrap();
        store.add_comment(&twin.id, "hi", "u2", "bob").await.unwrap();

        let posts = store.posts().await;
        assert_eq!(posts[0], posts[1]);
        assert_eq!(posts[0].content, "edited");
        assert_eq!(posts[0].likes, vec!["u2"]);
        assert_eq!(posts[0].comments.len(), 1);
        assert_eq!(posts[2], other);
        assert_eq!(stored_posts(&storage).await, posts);

        store.delete_post(&twin.id).await.unwrap();
        assert_eq!(store.posts().await, vec![other]);
    }

    #[tokio::test]
    async fn test_malformed_storage_reads_as_empty() {
        let storage: Arc<dyn KeyValueStore> = Arc::new(InMemoryStorage::new());
        storage.set(POSTS_KEY, "{not json").await.unwrap();

        let store = PostStore::load(storage).await;
        assert!(store.posts().await.is_empty());
    }

    #[tokio::test]
    async fn test_failed_write_leaves_memory_untouched() {
        let storage: Arc<dyn KeyValueStore> = Arc::new(InMemoryStorage::with_quota(64));
        let store = PostStore::load(storage).await;

        let long = "x".repeat(128);
        let err = store.add_post(&long, "u1", "alice", None).await.unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { .. }));
        assert!(store.posts().await.is_empty());
    }
}
