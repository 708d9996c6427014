//! Cache Store Module
//!
//! Main cache engine combining a HashMap index with an arena-backed recency
//! list for O(1) lookups and LRU eviction.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::cache::lru::{Iter, NodeId, RecencyList};
use crate::cache::CacheStats;
use crate::error::{CacheError, Result};

// == LRU Cache ==
/// Fixed-capacity key/value cache that evicts the least recently used entry.
///
/// Both `get` (on a hit) and `put` mark the key as most recently used.
/// There is no delete operation; entries leave only through eviction.
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Key to node handle
    index: HashMap<K, NodeId>,
    /// Entries in recency order
    order: RecencyList<K, V>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidArgument` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidArgument(
                "capacity must be a positive integer".to_string(),
            ));
        }

        debug!(capacity, "Creating LRU cache");
        Ok(Self {
            index: HashMap::with_capacity(capacity),
            order: RecencyList::with_capacity(capacity),
            stats: CacheStats::new(capacity),
            capacity,
        })
    }

    // == Get ==
    /// Returns the value for `key` and marks it as most recently used.
    ///
    /// A miss returns `None` and leaves the order untouched.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(key).copied() {
            Some(id) => {
                self.stats.record_hit();
                self.order.move_to_back(id);
                Some(self.order.value(id))
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Stores `value` under `key` and marks it as most recently used.
    ///
    /// Overwriting an existing key never evicts. Inserting a new key into a
    /// full cache evicts the least recently used entry first.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(&id) = self.index.get(&key) {
            *self.order.value_mut(id) = value;
            self.order.move_to_back(id);
            return;
        }
        self.insert_new(key, value);
    }

    // == Get Or Insert ==
    /// Returns the cached value for `key`, computing and storing it on a miss.
    ///
    /// `f` runs at most once, and only when `key` is absent.
    pub fn get_or_insert_with<F>(&mut self, key: K, f: F) -> &V
    where
        F: FnOnce() -> V,
    {
        let id = match self.index.get(&key).copied() {
            Some(id) => {
                self.stats.record_hit();
                self.order.move_to_back(id);
                id
            }
            None => {
                self.stats.record_miss();
                self.insert_new(key, f())
            }
        };
        self.order.value(id)
    }

    // == Peek ==
    /// Returns the value for `key` without touching recency or stats.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&id| self.order.value(id))
    }

    /// Returns the entry that the next eviction would remove.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.order
            .front()
            .map(|id| (self.order.key(id), self.order.value(id)))
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Iterates entries from least to most recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.order.iter()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.total_entries = self.len();
        stats
    }

    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[cfg(test)]
    pub(crate) fn debug_validate_invariants(&self) {
        self.order.debug_validate_invariants();
        assert_eq!(self.index.len(), self.order.len());
        assert!(self.len() <= self.capacity);
        for (key, _) in self.order.iter() {
            assert!(self.index.contains_key(key), "recency list key missing from index");
        }
    }

    // Caller guarantees `key` is absent.
    fn insert_new(&mut self, key: K, value: V) -> NodeId {
        match self.order.front() {
            Some(lru) if self.order.len() >= self.capacity => {
                // Reuse the evicted node's slot for the incoming entry.
                let (evicted, _) = self.order.replace(lru, key.clone(), value);
                self.index.remove(&evicted);
                self.order.move_to_back(lru);
                self.index.insert(key, lru);
                self.stats.record_eviction();
                debug!(
                    capacity = self.capacity,
                    evictions = self.stats.evictions,
                    "Evicted least recently used entry"
                );
                lru
            }
            _ => {
                let id = self.order.push_back(key.clone(), value);
                self.index.insert(key, id);
                id
            }
        }
    }
}
