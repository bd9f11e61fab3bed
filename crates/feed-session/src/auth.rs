use std::sync::Arc;

use tokio::sync::RwLock;

use feed_core::domain::User;
use feed_core::error::StorageError;
use feed_core::ports::KeyValueStore;

use crate::storage::{USER_KEY, read_json, write_json};

/// Mocked sign-in state.
///
/// Credentials are never checked: login and register fabricate a [`User`]
/// from what was typed and persist it under the `user` key.
pub struct AuthStore {
    storage: Arc<dyn KeyValueStore>,
    user: RwLock<Option<User>>,
}

impl AuthStore {
    /// Rehydrate the signed-in user; starts signed out if none is stored.
    pub async fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let user: Option<User> = read_json(storage.as_ref(), USER_KEY).await;
        if let Some(user) = &user {
            tracing::debug!(user_id = %user.id, "Restored signed-in user");
        }

        Self {
            storage,
            user: RwLock::new(user),
        }
    }

    pub async fn current_user(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.user.read().await.is_some()
    }

    /// Sign in as the user named by the email's local part. `_password` is ignored.
    pub async fn login(&self, email: &str, _password: &str) -> Result<User, StorageError> {
        self.sign_in(User::from_login(email)).await
    }

    /// Sign in as a freshly registered user. `_password` is ignored.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        _password: &str,
    ) -> Result<User, StorageError> {
        self.sign_in(User::new(username, email)).await
    }

    pub async fn logout(&self) -> Result<(), StorageError> {
        let mut current = self.user.write().await;
        self.storage.remove(USER_KEY).await?;

        if let Some(user) = current.take() {
            tracing::info!(user_id = %user.id, "Signed out");
        }
        Ok(())
    }

    async fn sign_in(&self, user: User) -> Result<User, StorageError> {
        let mut current = self.user.write().await;
        write_json(self.storage.as_ref(), USER_KEY, &user).await?;

        tracing::info!(user_id = %user.id, username = %user.username, "Signed in");
        *current = Some(user.clone());
        Ok(user)
    }
}
