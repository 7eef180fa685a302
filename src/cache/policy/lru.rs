//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::hash::Hash;

use super::{AccessOrder, EvictionPolicy, PolicyTracker};

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Inserts, reads and overwrites all move a key to the newest end; the
/// victim is the key at the oldest end.
#[derive(Debug, Clone)]
pub struct LruTracker<K> {
    /// Order of keys by access time
    order: AccessOrder<K>,
}

impl<K: Hash + Eq + Clone> LruTracker<K> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            order: AccessOrder::new(),
        }
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.order.oldest()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &K) -> bool {
        self.order.contains(key)
    }
}

impl<K: Hash + Eq + Clone> Default for LruTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone> PolicyTracker<K> for LruTracker<K> {
    fn policy(&self) -> EvictionPolicy {
        EvictionPolicy::Lru
    }

    fn record_insert(&mut self, key: &K) {
        self.order.touch(key);
    }

    fn record_access(&mut self, key: &K) {
        self.order.touch(key);
    }

    fn record_remove(&mut self, key: &K) {
        self.order.remove(key);
    }

    fn select_victim(&self) -> Option<K> {
        self.order.oldest().cloned()
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn clear(&mut self) {
        self.order.clear();
    }
}
