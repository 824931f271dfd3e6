//! # Nimbus Cache
//!
//! Namespaced JSON cache with bounded-retry writes for the Nimbus client SDK.
//!
//! The cache is a thin shim over an external key-value store: it builds
//! `<namespace>:<key>` physical keys, serializes values as JSON text, and
//! retries rejected writes a bounded number of times. Eviction and
//! persistence belong to the store.
//!
//! ## Design Principles
//!
//! - Stores are opaque string stores behind [`PurgeableStore`]
//! - Configuration is fixed at construction
//! - Write attempts are sequential; the last error is surfaced unchanged
//! - No error is swallowed except by the storage probe
//!
//! ## Available Stores
//!
//! - [`InMemoryStore`] - For testing and hosts without persistent storage
//!
//! ## Example
//!
//! ```rust
//! use nimbus_cache::{Cache, CacheConfig, InMemoryStore};
//! use serde_json::{json, Value};
//!
//! # tokio_test();
//! # fn tokio_test() {
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let cache = Cache::new(CacheConfig::new("prefix"), InMemoryStore::new());
//! cache.set("hash", &json!({"some": "json"})).await.unwrap();
//!
//! let value: Value = cache.get("hash").await.unwrap();
//! assert_eq!(value, json!({"some": "json"}));
//! # });
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod cache;
mod config;
mod error;
mod memory;
mod probe;

pub use backend::{LocalStore, PurgeableStore};
pub use cache::Cache;
pub use config::{CacheConfig, DEFAULT_MAX_RETRY_COUNT};
pub use error::{CacheError, CacheResult, StorageError, StorageResult};
pub use memory::InMemoryStore;
pub use probe::is_local_storage_available;
