//! Cache Entry Module
//!
//! A key/value pair that has passed validation and may enter the store.

use std::fmt;

use crate::error::{CacheError, Result};

// == Cache Entry ==
/// A validated key/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<K, V> {
    /// The cache key
    pub key: K,
    /// The stored value
    pub value: V,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates an entry from values already known to be present.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    // == Validated Constructor ==
    /// Builds an entry from possibly-absent parts.
    ///
    /// # Returns
    /// - `Ok(entry)` if both key and value are present
    /// - `Err(CacheError::InvalidEntry)` naming the missing part otherwise
    pub fn try_new(key: Option<K>, value: Option<V>) -> Result<Self> {
        match (key, value) {
            (Some(key), Some(value)) => Ok(Self::new(key, value)),
            (None, None) => Err(CacheError::InvalidEntry(
                "key and value are missing".to_string(),
            )),
            (None, Some(_)) => Err(CacheError::InvalidEntry("key is missing".to_string())),
            (Some(_), None) => Err(CacheError::InvalidEntry("value is missing".to_string())),
        }
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for CacheEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}
