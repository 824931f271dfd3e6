//! Error types for the cache and its storage collaborators.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Errors reported by a storage backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The storage facility cannot be used at all (disabled, sandboxed, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The storage rejects writes.
    #[error("storage is read-only")]
    ReadOnly,

    /// The storage is full and refused to take the entry.
    #[error("storage quota exceeded while writing {key}")]
    QuotaExceeded {
        /// The physical key being written.
        key: String,
    },

    /// Any other backend failure.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Nothing is stored under the key.
    #[error("no cached value for {key}")]
    NotFound {
        /// The physical key that was read.
        key: String,
    },

    /// The value could not be serialized to JSON.
    #[error("failed to encode cache value: {0}")]
    Encode(#[source] serde_json::Error),

    /// The stored string is not valid JSON for the requested type.
    #[error("failed to decode cached value: {0}")]
    Decode(#[source] serde_json::Error),

    /// The storage backend failed; the last backend error is kept as-is.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CacheError {
    /// Returns the storage error if this is one.
    pub fn as_storage(&self) -> Option<&StorageError> {
        match self {
            CacheError::Storage(err) => Some(err),
            _ => None,
        }
    }
}
