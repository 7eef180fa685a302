//! LIFO Tracker Module
//!
//! Evicts the key most recently written by a put. Only a single marker is
//! kept, not a full stack: once the marked key is gone there is no fallback
//! until the next put sets it again.

use super::{EvictionPolicy, PolicyTracker};

// == LIFO Tracker ==
/// Remembers the last key written by a put.
#[derive(Debug, Clone)]
pub struct LifoTracker<K> {
    last: Option<K>,
}

impl<K: PartialEq + Clone> LifoTracker<K> {
    /// Creates a new tracker with no marker set.
    pub fn new() -> Self {
        Self { last: None }
    }

    /// The key currently marked as last written.
    pub fn last_key(&self) -> Option<&K> {
        self.last.as_ref()
    }
}

impl<K: PartialEq + Clone> Default for LifoTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq + Clone> PolicyTracker<K> for LifoTracker<K> {
    fn policy(&self) -> EvictionPolicy {
        EvictionPolicy::Lifo
    }

    fn record_insert(&mut self, key: &K) {
        self.last = Some(key.clone());
    }

    // Reads leave the marker alone.
    fn record_access(&mut self, _key: &K) {}

    fn record_overwrite(&mut self, key: &K) {
        self.last = Some(key.clone());
    }

    fn record_remove(&mut self, key: &K) {
        if self.last.as_ref() == Some(key) {
            self.last = None;
        }
    }

    fn select_victim(&self) -> Option<K> {
        self.last.clone()
    }

    fn len(&self) -> usize {
        usize::from(self.last.is_some())
    }

    fn clear(&mut self) {
        self.last = None;
    }
}
