use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use bytes::Bytes;

use super::StateMachineDataStore;

/// In-memory payload store keyed by `(term, index)`.
///
/// Handles are cheap to clone and all share one table, so replication and
/// apply paths can hold their own copies.
#[derive(Clone, Default)]
pub struct InMemoryDataStore {
    inner: Arc<Mutex<BTreeMap<(u64, u64), Bytes>>>,
}

impl InMemoryDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every payload at or below `index`, across all terms. Called
    /// after compaction has made those entries unreachable.
    pub fn evict_through(&self, index: u64) {
        self.inner.lock().unwrap().retain(|&(_, i), _| i > index);
    }
}

impl StateMachineDataStore for InMemoryDataStore {
    fn read(&self, term: u64, index: u64) -> Option<Bytes> {
        self.inner.lock().unwrap().get(&(term, index)).cloned()
    }

    fn write(&self, term: u64, index: u64, data: Bytes) {
        self.inner.lock().unwrap().insert((term, index), data);
    }

    fn remove(&self, term: u64, index: u64) {
        self.inner.lock().unwrap().remove(&(term, index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_back_what_was_written() {
        let store = InMemoryDataStore::new();
        assert!(store.is_empty());

        store.write(1, 1, Bytes::from_static(b"a"));
        store.write(1, 2, Bytes::from_static(b"b"));
        assert_eq!(store.read(1, 1), Some(Bytes::from_static(b"a")));
        assert_eq!(store.read(2, 1), None);
        assert_eq!(store.len(), 2);

        store.remove(1, 1);
        assert_eq!(store.read(1, 1), None);
    }

    #[test]
    fn test_clones_share_the_table() {
        let store = InMemoryDataStore::new();
        let handle = store.clone();
        handle.write(3, 7, Bytes::from_static(b"shared"));
        assert_eq!(store.read(3, 7), Some(Bytes::from_static(b"shared")));
    }

    #[test]
    fn test_evict_through_drops_old_indexes() {
        let store = InMemoryDataStore::new();
        store.write(1, 5, Bytes::from_static(b"old"));
        store.write(2, 6, Bytes::from_static(b"older"));
        store.write(2, 9, Bytes::from_static(b"live"));

        store.evict_through(6);
        assert_eq!(store.read(1, 5), None);
        assert_eq!(store.read(2, 6), None);
        assert_eq!(store.read(2, 9), Some(Bytes::from_static(b"live")));
    }
}
