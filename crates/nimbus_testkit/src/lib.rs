//! # Nimbus Testkit
//!
//! Test utilities for the Nimbus client SDK.
//!
//! This crate provides:
//! - Property-based test generators using proptest
//! - Store fixtures for exercising the cache's retry path
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nimbus_testkit::prelude::*;
//!
//! #[tokio::test]
//! async fn retries_until_accepted() {
//!     let cache = Cache::new(CacheConfig::new("p"), FlakyStore::failing_first(2));
//!     cache.set("k", &1).await.unwrap();
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::{FlakyStore, ScriptedStore};
    pub use crate::generators::{
        plain_json_strategy, typed_leaf_strategy, typed_value_strategy,
    };
    pub use nimbus_cache::{Cache, CacheConfig};
}
