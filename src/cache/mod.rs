//! Cache Module
//!
//! Provides a bounded in-memory cache with pluggable eviction policies.

mod entry;
pub mod listener;
pub mod policy;
mod policy_cache;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use listener::{DiscardListener, FnListener, LogListener};
pub use policy::{EvictionPolicy, PolicyTracker, Tracker};
pub use policy_cache::PolicyCache;
pub use stats::CacheStats;
pub use store::BoundedStore;

// == Public Constants ==
/// Capacity used when none is configured
pub const DEFAULT_MAX_ITEMS: usize = 4;
