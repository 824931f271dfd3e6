//! In-memory store for testing.

use crate::backend::{LocalStore, PurgeableStore};
use crate::error::{StorageError, StorageResult};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// An in-memory string store.
///
/// This store keeps all entries in memory and is suitable for:
/// - Unit tests
/// - Integration tests
/// - Hosts without any persistent storage
///
/// Entries are never purged.
///
/// # Example
///
/// ```rust
/// use nimbus_cache::{InMemoryStore, LocalStore};
///
/// let store = InMemoryStore::new();
/// store.set_item("prefix:hash", "{}").unwrap();
/// assert_eq!(store.item("prefix:hash").as_deref(), Some("{}"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: RwLock<HashMap<String, String>>,
    read_only: AtomicBool,
}

impl InMemoryStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with pre-existing entries.
    #[must_use]
    pub fn with_items<K, V, I>(items: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            items: RwLock::new(
                items
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            read_only: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent write fail with [`StorageError::ReadOnly`].
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    /// Returns a copy of the value under `key`.
    pub fn item(&self, key: &str) -> Option<String> {
        self.items.read().get(key).cloned()
    }

    /// Returns a copy of all entries.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.items.read().clone()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.items.write().clear();
    }

    fn check_writable(&self) -> StorageResult<()> {
        if self.read_only.load(Ordering::SeqCst) {
            Err(StorageError::ReadOnly)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PurgeableStore for InMemoryStore {
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.item(key))
    }

    async fn set_purgeable_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.set_item(key, value)
    }
}

impl LocalStore for InMemoryStore {
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.check_writable()?;
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.check_writable()?;
        self.items.write().remove(key);
        Ok(())
    }
}
