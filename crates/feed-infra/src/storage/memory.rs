//! In-memory key/value storage - used for ephemeral sessions and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use feed_core::error::StorageError;
use feed_core::ports::KeyValueStore;

/// In-memory storage using a HashMap with async RwLock.
///
/// An optional quota caps the total size of keys plus values in bytes,
/// the way browser storage does. Data is lost when the value is dropped.
pub struct InMemoryStorage {
    store: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            quota: None,
        }
    }

    /// Storage that rejects writes once `bytes` would be exceeded.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            quota: Some(bytes),
        }
    }

    fn used_bytes(store: &HashMap<String, String>) -> usize {
        store.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.store.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut store = self.store.write().await;

        if let Some(limit) = self.quota {
            let replaced = store.get(key).map(|old| key.len() + old.len()).unwrap_or(0);
            let used = Self::used_bytes(&store) - replaced + key.len() + value.len();
            if used > limit {
                tracing::warn!(key, used, limit, "Storage quota exceeded");
                return Err(StorageError::QuotaExceeded { used, limit });
            }
        }

        store.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.store.write().await.remove(key);
        Ok(())
    }
}
