//! Eviction Policy Module
//!
//! Each policy keeps its own bookkeeping and answers one question: which
//! resident key should be sacrificed when the store is full and a new key
//! arrives.
//!
//! | Policy | Victim                               | On access              |
//! |--------|--------------------------------------|------------------------|
//! | FIFO   | oldest inserted key                  | no reordering          |
//! | LIFO   | last inserted or re-put key          | re-put moves marker    |
//! | LRU    | least recently accessed key          | move to newest         |
//! | MRU    | most recently accessed key           | move to newest         |
//! | LFU    | lowest frequency, then oldest use    | frequency + 1, re-stamp|

mod fifo;
mod lfu;
mod lifo;
mod lru;
mod mru;
mod order;

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CacheError;

pub use fifo::FifoTracker;
pub use lfu::LfuTracker;
pub use lifo::LifoTracker;
pub use lru::LruTracker;
pub use mru::MruTracker;
pub use order::AccessOrder;

// == Policy Tracker Contract ==
/// Bookkeeping contract shared by every eviction policy.
///
/// The facade calls these hooks after it has changed the store, so a tracker
/// only ever sees keys that are (or just were) resident.
pub trait PolicyTracker<K> {
    /// Which policy this tracker implements.
    fn policy(&self) -> EvictionPolicy;

    /// A brand-new key was added to the store.
    fn record_insert(&mut self, key: &K);

    /// A resident key was read, or overwritten by a put.
    fn record_access(&mut self, key: &K);

    /// A resident key was overwritten by a put.
    ///
    /// Defaults to [`PolicyTracker::record_access`]; LIFO overrides it because
    /// only a put moves its marker.
    fn record_overwrite(&mut self, key: &K) {
        self.record_access(key);
    }

    /// A key left the store, by eviction or explicit delete.
    fn record_remove(&mut self, key: &K);

    /// Names the key to evict. Only meaningful while the store is full.
    fn select_victim(&self) -> Option<K>;

    /// Number of keys this tracker currently knows about.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forgets all bookkeeping.
    fn clear(&mut self);
}

// == Eviction Policy Selector ==
/// Selects one of the five eviction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionPolicy {
    /// First in, first out
    Fifo,
    /// Last in, first out
    Lifo,
    /// Least recently used
    #[default]
    Lru,
    /// Most recently used
    Mru,
    /// Least frequently used, ties broken by least recent use
    Lfu,
}

impl EvictionPolicy {
    /// Every policy, in a stable order.
    pub const ALL: [EvictionPolicy; 5] = [
        EvictionPolicy::Fifo,
        EvictionPolicy::Lifo,
        EvictionPolicy::Lru,
        EvictionPolicy::Mru,
        EvictionPolicy::Lfu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EvictionPolicy::Fifo => "fifo",
            EvictionPolicy::Lifo => "lifo",
            EvictionPolicy::Lru => "lru",
            EvictionPolicy::Mru => "mru",
            EvictionPolicy::Lfu => "lfu",
        }
    }

    // == Tracker Factory ==
    /// Builds empty bookkeeping for this policy.
    pub fn tracker<K: Hash + Eq + Clone>(self) -> Tracker<K> {
        match self {
            EvictionPolicy::Fifo => Tracker::Fifo(FifoTracker::new()),
            EvictionPolicy::Lifo => Tracker::Lifo(LifoTracker::new()),
            EvictionPolicy::Lru => Tracker::Lru(LruTracker::new()),
            EvictionPolicy::Mru => Tracker::Mru(MruTracker::new()),
            EvictionPolicy::Lfu => Tracker::Lfu(LfuTracker::new()),
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvictionPolicy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(EvictionPolicy::Fifo),
            "lifo" => Ok(EvictionPolicy::Lifo),
            "lru" => Ok(EvictionPolicy::Lru),
            "mru" => Ok(EvictionPolicy::Mru),
            "lfu" => Ok(EvictionPolicy::Lfu),
            other => Err(CacheError::Configuration(format!(
                "unknown eviction policy '{}' (expected one of fifo, lifo, lru, mru, lfu)",
                other
            ))),
        }
    }
}

// == Tracker ==
/// The active policy's bookkeeping, one variant per policy.
#[derive(Debug, Clone)]
pub enum Tracker<K> {
    Fifo(FifoTracker<K>),
    Lifo(LifoTracker<K>),
    Lru(LruTracker<K>),
    Mru(MruTracker<K>),
    Lfu(LfuTracker<K>),
}

macro_rules! dispatch {
    ($self:expr, $t:ident => $body:expr) => {
        match $self {
            Tracker::Fifo($t) => $body,
            Tracker::Lifo($t) => $body,
            Tracker::Lru($t) => $body,
            Tracker::Mru($t) => $body,
            Tracker::Lfu($t) => $body,
        }
    };
}

impl<K: Hash + Eq + Clone> PolicyTracker<K> for Tracker<K> {
    fn policy(&self) -> EvictionPolicy {
        dispatch!(self, t => t.policy())
    }

    fn record_insert(&mut self, key: &K) {
        dispatch!(self, t => t.record_insert(key))
    }

    fn record_access(&mut self, key: &K) {
        dispatch!(self, t => t.record_access(key))
    }

    fn record_overwrite(&mut self, key: &K) {
        dispatch!(self, t => t.record_overwrite(key))
    }

    fn record_remove(&mut self, key: &K) {
        dispatch!(self, t => t.record_remove(key))
    }

    fn select_victim(&self) -> Option<K> {
        dispatch!(self, t => t.select_victim())
    }

    fn len(&self) -> usize {
        dispatch!(self, t => t.len())
    }

    fn clear(&mut self) {
        dispatch!(self, t => t.clear())
    }
}
