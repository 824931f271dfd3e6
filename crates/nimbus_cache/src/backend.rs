//! Storage collaborator traits.

use crate::error::StorageResult;
use async_trait::async_trait;

/// An asynchronous string key-value store backing the cache.
///
/// Stores are **opaque string stores**: they do not interpret keys or
/// values. Entries written through [`set_purgeable_item`] may be evicted by
/// the store under storage pressure; that policy belongs to the store.
///
/// # Invariants
///
/// - `get_item` returns `None` for a key that holds nothing
/// - `set_purgeable_item` overwrites any previous value for the key
/// - Implementations must be `Send + Sync`
///
/// [`set_purgeable_item`]: PurgeableStore::set_purgeable_item
#[async_trait]
pub trait PurgeableStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Writes `value` under `key` as an evictable entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the write is rejected.
    async fn set_purgeable_item(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// A synchronous persistent key-value facility, as offered by a host
/// environment (e.g. a browser's local storage).
///
/// Only used to probe whether such storage is usable.
pub trait LocalStore {
    /// Writes `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write is rejected.
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes `key` if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the removal is rejected.
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}
