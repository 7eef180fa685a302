//! FIFO Tracker Module
//!
//! Evicts the oldest inserted key. Reads and overwrites never reorder.

use std::hash::Hash;

use super::{AccessOrder, EvictionPolicy, PolicyTracker};

// == FIFO Tracker ==
/// Tracks insertion order for first-in, first-out eviction.
#[derive(Debug, Clone)]
pub struct FifoTracker<K> {
    /// Keys by insertion time
    order: AccessOrder<K>,
}

impl<K: Hash + Eq + Clone> FifoTracker<K> {
    /// Creates a new empty FIFO tracker.
    pub fn new() -> Self {
        Self {
            order: AccessOrder::new(),
        }
    }

    /// Oldest resident key, the next victim.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.order.oldest()
    }
}

impl<K: Hash + Eq + Clone> Default for FifoTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone> PolicyTracker<K> for FifoTracker<K> {
    fn policy(&self) -> EvictionPolicy {
        EvictionPolicy::Fifo
    }

    fn record_insert(&mut self, key: &K) {
        self.order.push_newest(key);
    }

    fn record_access(&mut self, _key: &K) {}

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
