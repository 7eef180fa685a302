//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key not found in cache
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Key or value missing on a put; the facade swallows this one
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// Rejected capacity or policy at construction time
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Cache is full and the policy could not name a victim
    #[error("Cache full: {0}")]
    CacheFull(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
