//! Traffic counters for a policy cache.
//!
//! The facade bumps these as it serves lookups and evicts; the resident count
//! is only filled in when a snapshot is taken.

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    /// Lookups of an absent key, including ones with no key at all
    pub misses: u64,
    /// Entries sacrificed to make room, one per discard notification
    pub evictions: u64,
    /// Puts dropped for a missing key or value
    pub ignored_puts: u64,
    /// Resident entries when the snapshot was taken
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one lookup, as a hit when the key was resident.
    pub fn record_lookup(&mut self, hit: bool) {
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_ignored_put(&mut self) {
        self.ignored_puts += 1;
    }

    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    // == Hit Rate ==
    /// Fraction of lookups that found their key; zero before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64,
        }
    }

    /// Copy of the counters stamped with the current resident count.
    pub fn snapshot(&self, total_entries: usize) -> Self {
        Self {
            total_entries,
            ..self.clone()
        }
    }
}
