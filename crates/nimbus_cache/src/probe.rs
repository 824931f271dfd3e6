//! Host storage feature detection.

use crate::backend::LocalStore;
use tracing::trace;

/// Throwaway key written by the probe.
const PROBE_KEY: &str = "__nimbus_storage_probe__";

/// Reports whether `store` accepts writes.
///
/// Writes and then removes a throwaway key. Every failure, including a
/// failed removal, counts as unavailable; none is propagated.
pub fn is_local_storage_available<S: LocalStore + ?Sized>(store: &S) -> bool {
    match store
        .set_item(PROBE_KEY, PROBE_KEY)
        .and_then(|()| store.remove_item(PROBE_KEY))
    {
        Ok(()) => true,
        Err(err) => {
            trace!(error = %err, "local storage unavailable");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StorageError, StorageResult};
    use crate::memory::InMemoryStore;

    struct RemoveFails(InMemoryStore);

    impl LocalStore for RemoveFails {
        fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
            self.0.set_item(key, value)
        }

        fn remove_item(&self, _key: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable("sandboxed".into()))
        }
    }

    #[test]
    fn writable_store_is_available_and_left_clean() {
        let store = InMemoryStore::with_items([("keep", "me")]);
        assert!(is_local_storage_available(&store));
        assert_eq!(store.len(), 1);
        assert_eq!(store.item(PROBE_KEY), None);
    }

    #[test]
    fn read_only_store_is_unavailable() {
        let store = InMemoryStore::new();
        store.set_read_only(true);
        assert!(!is_local_storage_available(&store));
    }

    #[test]
    fn failed_removal_is_unavailable() {
        assert!(!is_local_storage_available(&RemoveFails(InMemoryStore::new())));
    }

    #[test]
    fn works_through_trait_objects() {
        let store: Box<dyn LocalStore> = Box::new(InMemoryStore::new());
        assert!(is_local_storage_available(store.as_ref()));
    }
}
