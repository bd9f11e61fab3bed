//! Feed page actions: the checks the UI makes before touching the stores.

use feed_core::domain::{Post, User};
use feed_core::error::StorageError;

use crate::Session;

/// Transient notification shown after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    fn success(msg: &str) -> Self {
        Notice::Success(msg.to_string())
    }

    fn error(msg: &str) -> Self {
        Notice::Error(msg.to_string())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Notice::Success(msg) | Notice::Error(msg) => msg,
        }
    }
}

/// A post as seen by the signed-in user.
#[derive(Debug, Clone)]
pub struct FeedItem {
    pub post: Post,
    pub like_count: usize,
    pub liked_by_me: bool,
    pub is_mine: bool,
}

pub struct FeedController<'a> {
    session: &'a Session,
}

impl<'a> FeedController<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// The whole feed, newest first. Anonymous viewers like and own nothing.
    pub async fn feed(&self) -> Vec<FeedItem> {
        let me = self.session.auth().current_user().await;
        let my_id = me.as_ref().map(|u| u.id.as_str());

        self.session
            .posts()
            .posts()
            .await
            .into_iter()
            .map(|post| FeedItem {
                like_count: post.likes.len(),
                liked_by_me: my_id.is_some_and(|id| post.is_liked_by(id)),
                is_mine: my_id == Some(post.user_id.as_str()),
                post,
            })
            .collect()
    }

    /// Blank content creates nothing; the image URL is optional.
    pub async fn submit_post(
        &self,
        content: &str,
        image_url: Option<&str>,
    ) -> Result<Notice, StorageError> {
        let Some(user) = self.signed_in().await else {
            return Ok(Notice::error("Please sign in"));
        };
        if content.trim().is_empty() {
            return Ok(Notice::error("Please enter some text"));
        }

        let image_url = image_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(String::from);
        self.session
            .posts()
            .add_post(content.trim(), &user.id, &user.username, image_url)
            .await?;

        Ok(Notice::success("Post created!"))
    }

    pub async fn like(&self, post_id: &str) -> Result<Notice, StorageError> {
        let Some(user) = self.signed_in().await else {
            return Ok(Notice::error("Please sign in"));
        };

        match self.session.posts().toggle_like(post_id, &user.id).await? {
            Some(post) if post.is_liked_by(&user.id) => Ok(Notice::success("Liked")),
            Some(_) => Ok(Notice::success("Like removed")),
            None => Ok(Notice::error("Post not found")),
        }
    }

    /// Only the author may edit, and only to non-blank content.
    pub async fn save_edit(&self, post_id: &str, content: &str) -> Result<Notice, StorageError> {
        if content.trim().is_empty() {
            return Ok(Notice::error("Please enter some text"));
        }
        if let Err(notice) = self.owned_post(post_id).await {
            return Ok(notice);
        }

        self.session.posts().edit_post(post_id, content.trim()).await?;
        Ok(Notice::success("Post updated!"))
    }

    pub async fn delete(&self, post_id: &str) -> Result<Notice, StorageError> {
        if let Err(notice) = self.owned_post(post_id).await {
            return Ok(notice);
        }

        self.session.posts().delete_post(post_id).await?;
        Ok(Notice::success("Post deleted!"))
    }

    pub async fn comment(&self, post_id: &str, content: &str) -> Result<Notice, StorageError> {
        let Some(user) = self.signed_in().await else {
            return Ok(Notice::error("Please sign in"));
        };
        if content.trim().is_empty() {
            return Ok(Notice::error("Please enter some text"));
        }

        let updated = self
            .session
            .posts()
            .add_comment(post_id, content.trim(), &user.id, &user.username)
            .await?;

        Ok(match updated {
            Some(_) => Notice::success("Comment added!"),
            None => Notice::error("Post not found"),
        })
    }

    async fn signed_in(&self) -> Option<User> {
        self.session.auth().current_user().await
    }

    async fn owned_post(&self, post_id: &str) -> Result<Post, Notice> {
        let user = self
            .signed_in()
            .await
            .ok_or_else(|| Notice::error("Please sign in"))?;
        let post = self
            .session
            .posts()
            .find(post_id)
            .await
            .ok_or_else(|| Notice::error("Post not found"))?;

        if post.user_id != user.id {
            return Err(Notice::error("You can only change your own posts"));
        }
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use feed_core::ports::KeyValueStore;
    use feed_infra::InMemoryStorage;

    use super::*;

    async fn signed_in_session() -> Session {
        let storage: Arc<dyn KeyValueStore> = Arc::new(InMemoryStorage::new());
        let session = Session::open(storage).await;
        session.auth().register("alice", "alice@example.com", "pw").await.unwrap();
        session
    }

    #[tokio::test]
    async fn test_blank_post_changes_nothing() {
        let session = signed_in_session().await;

        for content in ["", "   ", "\n\t "] {
            let notice = session.feed().submit_post(content, None).await.unwrap();
            assert!(!notice.is_success());
        }
        assert!(session.posts().posts().await.is_empty());
    }

    #[tokio::test]
    async fn test_signed_out_cannot_post() {
        let session = Session::open(Arc::new(InMemoryStorage::new())).await;
        let notice = session.feed().submit_post("hello", None).await.unwrap();

        assert_eq!(notice, Notice::Error("Please sign in".into()));
        assert!(session.posts().posts().await.is_empty());
    }

    #[tokio::test]
    async fn test_submit_trims_and_marks_ownership() {
        let session = signed_in_session().await;
        let feed = session.feed();

        feed.submit_post("  hello  ", Some(" https://img.example/a.png "))
            .await
            .unwrap();
        let items = feed.feed().await;

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].post.content, "hello");
        assert_eq!(items[0].post.image_url.as_deref(), Some("https://img.example/a.png"));
        assert!(items[0].is_mine);
        assert!(!items[0].liked_by_me);
    }

    #[tokio::test]
    async fn test_like_toggles_flag() {
        let session = signed_in_session().await;
        let feed = session.feed();
        feed.submit_post("hello", None).await.unwrap();
        let post_id = feed.feed().await[0].post.id.clone();

        assert_eq!(feed.like(&post_id).await.unwrap().message(), "Liked");
        let item = &feed.feed().await[0];
        assert!(item.liked_by_me);
        assert_eq!(item.like_count, 1);

        assert_eq!(feed.like(&post_id).await.unwrap().message(), "Like removed");
        assert_eq!(feed.feed().await[0].like_count, 0);
    }

    #[tokio::test]
    async fn test_only_author_can_edit_or_delete() {
        let session = signed_in_session().await;
        let foreign = session
            .posts()
            .add_post("not yours", "someone-else", "mallory", None)
            .await
            .unwrap();

        let edit = session.feed().save_edit(&foreign.id, "mine now").await.unwrap();
        assert!(!edit.is_success());
        let delete = session.feed().delete(&foreign.id).await.unwrap();
        assert!(!delete.is_success());

        assert_eq!(session.posts().posts().await, vec![foreign]);
    }

    #[tokio::test]
    async fn test_edit_and_delete_own_post() {
        let session = signed_in_session().await;
        let feed = session.feed();
        feed.submit_post("first draft", None).await.unwrap();
        let post_id = feed.feed().await[0].post.id.clone();

        assert!(!feed.save_edit(&post_id, "  ").await.unwrap().is_success());
        assert!(feed.save_edit(&post_id, "  final\n").await.unwrap().is_success());
        assert_eq!(feed.feed().await[0].post.content, "final");

        assert!(feed.delete(&post_id).await.unwrap().is_success());
        assert!(feed.feed().await.is_empty());
    }

    #[tokio::test]
    async fn test_comment_on_missing_post() {
        let session = signed_in_session().await;
        let notice = session.feed().comment("missing", "hi").await.unwrap();
        assert_eq!(notice, Notice::Error("Post not found".into()));
    }
}
