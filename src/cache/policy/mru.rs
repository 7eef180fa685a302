//! MRU Tracker Module
//!
//! Evicts the most recently used key. Same bookkeeping as LRU, opposite end.

use std::hash::Hash;

use super::{AccessOrder, EvictionPolicy, PolicyTracker};

// == MRU Tracker ==
/// Tracks access order and names the newest key as the victim.
#[derive(Debug, Clone)]
pub struct MruTracker<K> {
    order: AccessOrder<K>,
}

impl<K: Hash + Eq + Clone> MruTracker<K> {
    pub fn new() -> Self {
        Self {
            order: AccessOrder::new(),
        }
    }

    /// Returns the most recently used key without removing it.
    pub fn peek_newest(&self) -> Option<&K> {
        self.order.newest()
    }
}

impl<K: Hash + Eq + Clone> Default for MruTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone> PolicyTracker<K> for MruTracker<K> {
    fn policy(&self) -> EvictionPolicy {
        EvictionPolicy::Mru
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
        self.order.newest().cloned()
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn clear(&mut self) {
        self.order.clear();
    }
}
