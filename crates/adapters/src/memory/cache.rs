//! Concurrent key-value cache
//!
//! The cache never fails: absence is expressed through `bool` and `Option`
//! returns. `try_insert` is atomic per key, so two concurrent inserts of
//! the same key resolve to exactly one winner and no entry is ever lost or
//! duplicated. Snapshots are detached copies; callers filter and sort them
//! without holding any cache lock, and mutations made after the snapshot
//! are not reflected in it.

use std::hash::Hash;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Thread-safe mapping from key to value
pub trait Cache<K, V>: Send + Sync {
    /// Inserts only if the key is absent; returns false without mutation
    /// when the key is already present
    fn try_insert(&self, key: K, value: V) -> bool;

    /// Non-mutating lookup
    fn get(&self, key: &K) -> Option<V>;

    /// Inserts or replaces, echoing the value just stored
    fn set(&self, key: K, value: V) -> V;

    /// Returns true if an entry existed and was removed
    fn try_remove(&self, key: &K) -> bool;

    fn contains_key(&self, key: &K) -> bool;

    /// Point-in-time, caller-owned copy of all current values
    fn snapshot(&self) -> Vec<V>;
}

/// `Cache` implementation over a sharded concurrent hash map
pub struct ConcurrentCache<K, V> {
    entries: DashMap<K, V>,
}

impl<K, V> ConcurrentCache<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> Default for ConcurrentCache<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Cache<K, V> for ConcurrentCache<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    fn try_insert(&self, key: K, value: V) -> bool {
        match self.entries.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: K, value: V) -> V {
        self.entries.insert(key, value.clone());
        value
    }

    fn try_remove(&self, key: &K) -> bool {
        self.entries.remove(key).is_some()
    }

    fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    fn snapshot(&self) -> Vec<V> {
        self.entries
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }
}
