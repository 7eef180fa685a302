//! LFU Tracker Module
//!
//! Evicts the key with the lowest use count. Ties go to the key whose last
//! use carries the oldest logical timestamp, so LFU degrades to LRU among
//! equally popular keys.

use std::collections::HashMap;
use std::hash::Hash;

use super::{EvictionPolicy, PolicyTracker};

// == Usage ==
/// Per-key counters. Field order matches the eviction ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Usage {
    frequency: u64,
    last_used: u64,
}

// == LFU Tracker ==
/// Tracks use frequency and last-use tick for every resident key.
#[derive(Debug, Clone)]
pub struct LfuTracker<K> {
    usage: HashMap<K, Usage>,
    /// Logical clock, bumped on every insert or access
    clock: u64,
}

impl<K: Hash + Eq + Clone> LfuTracker<K> {
    pub fn new() -> Self {
        Self {
            usage: HashMap::new(),
            clock: 0,
        }
    }

    /// Use count of a tracked key. A fresh insert counts as one use.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.usage.get(key).map(|u| u.frequency)
    }

    /// Logical timestamp of the key's last insert or access.
    pub fn last_used(&self, key: &K) -> Option<u64> {
        self.usage.get(key).map(|u| u.last_used)
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }
}

impl<K: Hash + Eq + Clone> Default for LfuTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone> PolicyTracker<K> for LfuTracker<K> {
    fn policy(&self) -> EvictionPolicy {
        EvictionPolicy::Lfu
    }

    fn record_insert(&mut self, key: &K) {
        let now = self.tick();
        self.usage.insert(
            key.clone(),
            Usage {
                frequency: 1,
                last_used: now,
            },
        );
    }

    fn record_access(&mut self, key: &K) {
        let now = self.tick();
        if let Some(usage) = self.usage.get_mut(key) {
            usage.frequency += 1;
            usage.last_used = now;
        }
    }

    fn record_remove(&mut self, key: &K) {
        self.usage.remove(key);
    }

    // Linear scan; timestamps are unique so the minimum is too.
    fn select_victim(&self) -> Option<K> {
        self.usage
            .iter()
            .min_by_key(|(_, usage)| **usage)
            .map(|(key, _)| key.clone())
    }

    fn len(&self) -> usize {
        self.usage.len()
    }

    fn clear(&mut self) {
        self.usage.clear();
        self.clock = 0;
    }
}
