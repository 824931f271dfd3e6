//! Store fixtures for cache tests.

use async_trait::async_trait;
use nimbus_cache::{InMemoryStore, LocalStore, PurgeableStore, StorageError, StorageResult};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

/// A store whose first `n` writes are rejected.
///
/// Each rejection carries the attempt number in its message
/// (`"write attempt 2 rejected"`), so tests can tell which attempt's error
/// reached them. Accepted writes land in an [`InMemoryStore`].
#[derive(Debug, Default)]
pub struct FlakyStore {
    inner: InMemoryStore,
    failures: u32,
    attempts: AtomicU32,
    writes: Mutex<Vec<(String, String)>>,
}

impl FlakyStore {
    /// Creates a store that rejects its first `failures` writes.
    pub fn failing_first(failures: u32) -> Self {
        Self {
            failures,
            ..Self::default()
        }
    }

    /// Creates a store that rejects every write.
    pub fn always_failing() -> Self {
        Self::failing_first(u32::MAX)
    }

    /// Number of write attempts seen so far.
    pub fn write_attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Every attempted write, rejected or not, in order.
    pub fn attempted_writes(&self) -> Vec<(String, String)> {
        self.writes.lock().clone()
    }

    /// The entries that were accepted.
    pub fn inner(&self) -> &InMemoryStore {
        &self.inner
    }
}

#[async_trait]
impl PurgeableStore for FlakyStore {
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.inner.item(key))
    }

    async fn set_purgeable_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        self.writes.lock().push((key.to_string(), value.to_string()));
        if attempt <= self.failures {
            return Err(StorageError::Backend(format!("write attempt {attempt} rejected")));
        }
        self.inner.set_item(key, value)
    }
}

/// A store that answers every read with a fixed response and records what
/// it was asked.
#[derive(Debug, Default)]
pub struct ScriptedStore {
    response: Option<String>,
    reads: Mutex<Vec<String>>,
    writes: Mutex<Vec<(String, String)>>,
}

impl ScriptedStore {
    /// Creates a store whose reads return `response`.
    pub fn returning(response: Option<&str>) -> Self {
        Self {
            response: response.map(str::to_string),
            ..Self::default()
        }
    }

    /// Keys read so far, in order.
    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().clone()
    }

    /// Writes received so far, in order.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().clone()
    }
}

#[async_trait]
impl PurgeableStore for ScriptedStore {
    async fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.reads.lock().push(key.to_string());
        Ok(self.response.clone())
    }

    async fn set_purgeable_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.writes.lock().push((key.to_string(), value.to_string()));
        Ok(())
    }
}
