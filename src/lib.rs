//! Policy Cache - A bounded in-memory cache with pluggable eviction
//!
//! Provides one storage contract with FIFO, LIFO, LRU, MRU and LFU eviction.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

pub use cache::{EvictionPolicy, PolicyCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use session::Session;
