//! Bounded Store Module
//!
//! Raw key/value storage. It enforces nothing on its own: the facade checks
//! capacity and asks the policy for a victim before inserting.

use std::collections::hash_map::{self, HashMap};
use std::hash::Hash;

// == Bounded Store ==
/// Key/value mapping with a fixed maximum size recorded alongside it.
#[derive(Debug, Clone)]
pub struct BoundedStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// Maximum number of entries the facade will allow
    max_items: usize,
}

impl<K: Hash + Eq, V> BoundedStore<K, V> {
    // == Constructor ==
    /// Creates an empty store sized for `max_items` entries.
    pub fn new(max_items: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(max_items),
            max_items,
        }
    }

    // == Insert Or Update ==
    /// Stores a value, returning the previous one if the key was present.
    pub fn insert_or_update(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    // == Delete ==
    /// Removes a key, returning its value if it was present.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key)
    }

    // == Lookup ==
    pub fn lookup(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates resident entries in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }
}

impl<K, V> BoundedStore<K, V> {
    // == Count ==
    /// Returns the current number of entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// True once the store holds `max_items` entries or more.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.max_items
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
