//! Response DTOs for the line-oriented driver
//!
//! Every command produces exactly one of these, written as one JSON line.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cache::{CacheStats, EvictionPolicy};

/// Any response the driver can emit.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Response {
    Put(PutResponse),
    Get(GetResponse),
    Delete(DeleteResponse),
    Count(CountResponse),
    Dump(DumpResponse),
    Stats(StatsResponse),
    Error(ErrorResponse),
}

/// Response to `put`
#[derive(Debug, Clone, Serialize)]
pub struct PutResponse {
    /// Whether the entry was written; false when key or value was missing
    pub stored: bool,
    /// The key that was written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Key evicted to make room, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discarded: Option<String>,
}

impl PutResponse {
    pub fn stored(key: impl Into<String>, discarded: Option<String>) -> Self {
        Self {
            stored: true,
            key: Some(key.into()),
            discarded,
        }
    }

    pub fn ignored() -> Self {
        Self {
            stored: false,
            key: None,
            discarded: None,
        }
    }
}

/// Response to `get`
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: String,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response to `del`
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The key that was deleted
    pub key: String,
}

impl DeleteResponse {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' deleted successfully", key),
            key,
        }
    }
}

/// Response to `count`
#[derive(Debug, Clone, Serialize)]
pub struct CountResponse {
    pub count: usize,
    pub capacity: usize,
    pub policy: EvictionPolicy,
}

/// Response to `print`, entries keyed in sorted order
#[derive(Debug, Clone, Serialize)]
pub struct DumpResponse {
    pub entries: BTreeMap<String, String>,
}

/// Response to `stats`
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub policy: EvictionPolicy,
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(policy: EvictionPolicy, stats: CacheStats) -> Self {
        let hit_rate = stats.hit_rate();
        Self {
            policy,
            stats,
            hit_rate,
        }
    }
}

/// Error response for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
