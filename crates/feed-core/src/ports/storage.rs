use async_trait::async_trait;

use crate::error::StorageError;

/// String key/value storage - the persisted side of a client session.
///
/// Reads and writes replace whole values; there are no partial updates.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the raw value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
