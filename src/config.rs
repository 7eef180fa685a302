//! Configuration Module
//!
//! Handles loading and validating cache configuration from environment variables.

use std::env;

use crate::cache::{EvictionPolicy, DEFAULT_MAX_ITEMS};
use crate::error::{CacheError, Result};

/// Cache configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_items: usize,
    /// Eviction policy applied once the cache is full
    pub policy: EvictionPolicy,
}

impl Config {
    /// Creates a Config from explicit values, rejecting a zero capacity.
    pub fn new(max_items: usize, policy: EvictionPolicy) -> Result<Self> {
        let config = Self { max_items, policy };
        config.validate()?;
        Ok(config)
    }

    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_ITEMS` - Maximum cache entries (default: 4)
    /// - `CACHE_POLICY` - One of fifo, lifo, lru, mru, lfu (default: lru)
    ///
    /// Unset variables fall back to defaults; set but invalid ones are rejected.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Config::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_items = match lookup("CACHE_MAX_ITEMS") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                CacheError::Configuration(format!(
                    "CACHE_MAX_ITEMS must be a positive integer, got '{}'",
                    raw
                ))
            })?,
            None => DEFAULT_MAX_ITEMS,
        };

        let policy = match lookup("CACHE_POLICY") {
            Some(raw) => raw.parse()?,
            None => EvictionPolicy::default(),
        };

        Self::new(max_items, policy)
    }

    /// Rejects configurations no cache can be built from.
    pub fn validate(&self) -> Result<()> {
        validate_capacity(self.max_items)
    }
}

/// Rejects a zero capacity; every cache needs room for at least one entry.
pub(crate) fn validate_capacity(max_items: usize) -> Result<()> {
    if max_items == 0 {
        return Err(CacheError::Configuration(
            "cache capacity must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            policy: EvictionPolicy::default(),
        }
    }
}
