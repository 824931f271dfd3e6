//! Configuration for the cache.

/// Retries after a failed write when none are configured explicitly.
pub const DEFAULT_MAX_RETRY_COUNT: u32 = 3;

/// Configuration for a [`crate::Cache`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Prefix that separates this cache's keys from other users of the store.
    pub namespace: String,
    /// Number of times a failed write is retried before giving up.
    /// Zero means a single attempt.
    pub max_retry_count: u32,
}

impl CacheConfig {
    /// Creates a configuration for the given namespace.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            max_retry_count: DEFAULT_MAX_RETRY_COUNT,
        }
    }

    /// Sets the maximum retry count.
    pub fn with_max_retry_count(mut self, max_retry_count: u32) -> Self {
        self.max_retry_count = max_retry_count;
        self
    }

    /// Total number of write attempts, first try included.
    pub fn max_attempts(&self) -> u32 {
        self.max_retry_count.saturating_add(1)
    }
}
