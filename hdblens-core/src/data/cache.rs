//! Explicit memoization for synthetic datasets.
//!
//! The cache key is the complete generation input (seed, count). There is no
//! implicit global cache: callers own a `DatasetCache` value, and
//! invalidation is by key. Cached datasets are shared via `Arc` because they
//! are immutable after construction.

use super::synthetic::generate;
use crate::domain::Dataset;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Invalidation key: the full input of `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetKey {
    pub seed: u64,
    pub count: usize,
}

impl DatasetKey {
    pub fn new(seed: u64, count: usize) -> Self {
        Self { seed, count }
    }
}

/// Memoizing wrapper over synthetic generation.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<DatasetKey, Arc<Dataset>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached dataset for this key, generating it on first use.
    pub fn get_or_generate(&mut self, key: DatasetKey) -> Arc<Dataset> {
        Arc::clone(
            self.entries
                .entry(key)
                .or_insert_with(|| Arc::new(generate(key.seed, key.count))),
        )
    }

    /// Peek without generating.
    pub fn get(&self, key: DatasetKey) -> Option<Arc<Dataset>> {
        self.entries.get(&key).cloned()
    }

    /// Drop the entry for a key. Returns true if one was cached.
    pub fn invalidate(&mut self, key: DatasetKey) -> bool {
        self.entries.remove(&key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_lookup_returns_same_allocation() {
        let mut cache = DatasetCache::new();
        let key = DatasetKey::new(42, 50);
        let first = cache.get_or_generate(key);
        let second = cache.get_or_generate(key);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn distinct_keys_get_distinct_entries() {
        let mut cache = DatasetCache::new();
        let a = cache.get_or_generate(DatasetKey::new(42, 50));
        let b = cache.get_or_generate(DatasetKey::new(43, 50));
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn invalidation_forces_regeneration() {
        let mut cache = DatasetCache::new();
        let key = DatasetKey::new(42, 50);
        let first = cache.get_or_generate(key);
        assert!(cache.invalidate(key));
        let second = cache.get_or_generate(key);
        // New allocation, identical content (generation is deterministic).
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first.fingerprint(), second.fingerprint());
    }

    #[test]
    fn get_does_not_populate() {
        let cache = DatasetCache::new();
        assert!(cache.get(DatasetKey::new(42, 50)).is_none());
        assert!(cache.is_empty());
    }
}
