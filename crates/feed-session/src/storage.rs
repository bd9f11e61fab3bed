//! Typed JSON access on top of the raw key/value port.

use feed_core::error::StorageError;
use feed_core::ports::KeyValueStore;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const USER_KEY: &str = "user";
pub const POSTS_KEY: &str = "posts";
pub const PROFILE_KEY: &str = "userData";

/// Read and decode `key`. Missing, unreadable or malformed values all read
/// as `None`; only the latter two are logged.
pub(crate) async fn read_json<T: DeserializeOwned>(
    storage: &dyn KeyValueStore,
    key: &str,
) -> Option<T> {
    let raw = match storage.get(key).await {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read stored value");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding malformed stored value");
            None
        }
    }
}

pub(crate) async fn write_json<T: Serialize + ?Sized>(
    storage: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    storage.set(key, &raw).await
}
