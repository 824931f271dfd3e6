//! Namespaced JSON cache.

use crate::backend::PurgeableStore;
use crate::config::CacheConfig;
use crate::error::{CacheError, CacheResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, trace};

/// A thin JSON cache over a [`PurgeableStore`].
///
/// Values are stored under `<namespace>:<key>` as JSON text. Writes are
/// retried immediately, up to the configured retry count, before the
/// store's error is handed back to the caller.
pub struct Cache<S: PurgeableStore + ?Sized> {
    config: CacheConfig,
    store: Arc<S>,
}

impl<S: PurgeableStore> Cache<S> {
    /// Creates a cache that owns its store.
    pub fn new(config: CacheConfig, store: S) -> Self {
        Self::with_shared_store(config, Arc::new(store))
    }
}

impl<S: PurgeableStore + ?Sized> Cache<S> {
    /// Creates a cache over a store shared with other users.
    pub fn with_shared_store(config: CacheConfig, store: Arc<S>) -> Self {
        Self { config, store }
    }

    /// The key namespace.
    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    /// How many times a failed write is retried.
    pub fn max_retry_count(&self) -> u32 {
        self.config.max_retry_count
    }

    /// The underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// The key `key` is stored under.
    pub fn physical_key(&self, key: &str) -> String {
        format!("{}:{}", self.config.namespace, key)
    }

    /// Reads and decodes the value cached under `key`.
    ///
    /// # Errors
    ///
    /// - [`CacheError::NotFound`] if nothing is stored under the key
    /// - [`CacheError::Decode`] if the stored text is not valid JSON for `T`
    /// - [`CacheError::Storage`] if the store cannot be read
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> CacheResult<T> {
        let physical_key = self.physical_key(key);
        let stored = self
            .store
            .get_item(&physical_key)
            .await?
            .ok_or_else(|| CacheError::NotFound {
                key: physical_key.clone(),
            })?;
        trace!(key = %physical_key, len = stored.len(), "cache hit");
        serde_json::from_str(&stored).map_err(CacheError::Decode)
    }

    /// Encodes `value` as JSON and writes it under `key`.
    ///
    /// A rejected write is retried with the same key and value until it
    /// succeeds or `max_retry_count` retries have failed. Attempts run one
    /// after another, never concurrently.
    ///
    /// # Errors
    ///
    /// - [`CacheError::Encode`] if `value` cannot be serialized
    /// - [`CacheError::Storage`] holding the last attempt's error once every
    ///   attempt has failed
    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> CacheResult<()> {
        let physical_key = self.physical_key(key);
        let payload = serde_json::to_string(value).map_err(CacheError::Encode)?;
        let max_attempts = self.config.max_attempts();

        let mut attempt = 1;
        loop {
            match self.store.set_purgeable_item(&physical_key, &payload).await {
                Ok(()) => {
                    trace!(key = %physical_key, attempt, "cache write succeeded");
                    return Ok(());
                }
                Err(err) if attempt < max_attempts => {
                    debug!(
                        key = %physical_key,
                        attempt,
                        max_attempts,
                        error = %err,
                        "cache write failed, retrying"
                    );
                    attempt += 1;
                }
                Err(err) => {
                    debug!(
                        key = %physical_key,
                        attempts = attempt,
                        error = %err,
                        "cache write failed, retries exhausted"
                    );
                    return Err(err.into());
                }
            }
        }
    }
}

impl<S: PurgeableStore + ?Sized> std::fmt::Debug for Cache<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache").field("config", &self.config).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::memory::InMemoryStore;
    use serde_json::{json, Value};

    fn cache() -> Cache<InMemoryStore> {
        Cache::new(CacheConfig::new("prefix"), InMemoryStore::new())
    }

    #[test]
    fn physical_key_joins_namespace() {
        assert_eq!(cache().physical_key("hash"), "prefix:hash");
        assert_eq!(cache().physical_key(""), "prefix:");
        assert_eq!(cache().physical_key("a:b"), "prefix:a:b");
    }

    #[tokio::test]
    async fn set_writes_json_text() {
        let cache = cache();
        cache.set("hash", &json!({"some": "json"})).await.unwrap();
        assert_eq!(
            cache.store().item("prefix:hash").as_deref(),
            Some(r#"{"some":"json"}"#)
        );
    }

    #[tokio::test]
    async fn get_reads_json_text() {
        let store = InMemoryStore::with_items([("prefix:hash", r#"{"some":"json"}"#)]);
        let cache = Cache::new(CacheConfig::new("prefix"), store);
        let value: Value = cache.get("hash").await.unwrap();
        assert_eq!(value, json!({"some": "json"}));
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let err = cache().get::<Value>("hash").await.unwrap_err();
        assert!(matches!(err, CacheError::NotFound { key } if key == "prefix:hash"));
    }

    #[tokio::test]
    async fn get_invalid_json_is_decode_error() {
        let store = InMemoryStore::with_items([("prefix:hash", "{not json")]);
        let cache = Cache::new(CacheConfig::new("prefix"), store);
        let err = cache.get::<Value>("hash").await.unwrap_err();
        assert!(matches!(err, CacheError::Decode(_)));
    }

    #[tokio::test]
    async fn set_on_read_only_store_surfaces_storage_error() {
        let cache = Cache::new(
            CacheConfig::new("prefix").with_max_retry_count(2),
            InMemoryStore::new(),
        );
        cache.store().set_read_only(true);
        let err = cache.set("hash", &1).await.unwrap_err();
        assert_eq!(err.as_storage(), Some(&StorageError::ReadOnly));
        assert!(cache.store().is_empty());
    }

    #[tokio::test]
    async fn namespaces_do_not_collide() {
        let store = Arc::new(InMemoryStore::new());
        let a = Cache::with_shared_store(CacheConfig::new("a"), Arc::clone(&store));
        let b = Cache::with_shared_store(CacheConfig::new("b"), Arc::clone(&store));

        a.set("k", "from a").await.unwrap();
        b.set("k", "from b").await.unwrap();

        assert_eq!(a.get::<String>("k").await.unwrap(), "from a");
        assert_eq!(b.get::<String>("k").await.unwrap(), "from b");
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn last_write_wins() {
        let cache = cache();
        cache.set("k", &json!([1])).await.unwrap();
        cache.set("k", &json!([2])).await.unwrap();
        assert_eq!(cache.get::<Value>("k").await.unwrap(), json!([2]));
    }
}
