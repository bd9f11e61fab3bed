use std::sync::Arc;

use feed_core::ports::KeyValueStore;

use crate::{AuthStore, FeedController, PostStore, ProfileStore};

/// One client session: every store, rehydrated from the same storage.
///
/// Stores are only reachable through a `Session`, so there is no way to use
/// one before it has been loaded.
pub struct Session {
    auth: AuthStore,
    posts: PostStore,
    profile: ProfileStore,
}

impl Session {
    pub async fn open(storage: Arc<dyn KeyValueStore>) -> Self {
        let session = Self {
            auth: AuthStore::load(storage.clone()).await,
            posts: PostStore::load(storage.clone()).await,
            profile: ProfileStore::load(storage).await,
        };
        tracing::debug!("Session opened");
        session
    }

    pub fn auth(&self) -> &AuthStore {
        &self.auth
    }

    pub fn posts(&self) -> &PostStore {
        &self.posts
    }

    pub fn profile(&self) -> &ProfileStore {
        &self.profile
    }

    /// Feed page actions on behalf of the signed-in user.
    pub fn feed(&self) -> FeedController<'_> {
        FeedController::new(self)
    }
}
