use std::sync::Arc;

use tokio::sync::RwLock;

use feed_core::domain::{ProfileData, ProfileUpdate};
use feed_core::error::StorageError;
use feed_core::ports::KeyValueStore;

use crate::storage::{PROFILE_KEY, read_json, write_json};

/// Profile settings kept under the `userData` key.
pub struct ProfileStore {
    storage: Arc<dyn KeyValueStore>,
    profile: RwLock<ProfileData>,
}

impl ProfileStore {
    pub async fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let profile = read_json(storage.as_ref(), PROFILE_KEY)
            .await
            .unwrap_or_default();

        Self {
            storage,
            profile: RwLock::new(profile),
        }
    }

    pub async fn profile(&self) -> ProfileData {
        self.profile.read().await.clone()
    }

    /// Merge `update` into the stored profile and return the result.
    pub async fn update(&self, update: ProfileUpdate) -> Result<ProfileData, StorageError> {
        let mut profile = self.profile.write().await;
        let mut next = profile.clone();
        next.apply(update);

        write_json(self.storage.as_ref(), PROFILE_KEY, &next).await?;
        *profile = next.clone();
        Ok(next)
    }

    /// Forget every profile setting.
    pub async fn clear(&self) -> Result<(), StorageError> {
        let mut profile = self.profile.write().await;
        self.storage.remove(PROFILE_KEY).await?;
        *profile = ProfileData::default();
        Ok(())
    }
}
