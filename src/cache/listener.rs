//! Discard listener: a callback invoked whenever the policy evicts an entry.
//!
//! # Example
//! ```
//! use policy_cache::cache::{EvictionPolicy, PolicyCache};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let discarded = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&discarded);
//!
//! let mut cache = PolicyCache::with_listener(2, EvictionPolicy::Fifo, move |key: &String| {
//!     sink.borrow_mut().push(key.clone());
//! })
//! .unwrap();
//!
//! cache.put("a".to_string(), 1).unwrap();
//! cache.put("b".to_string(), 2).unwrap();
//! cache.put("c".to_string(), 3).unwrap(); // evicts "a"
//!
//! assert_eq!(*discarded.borrow(), vec!["a".to_string()]);
//! ```

use std::fmt;

use tracing::info;

// == Discard Listener ==

/// Receives the key of every evicted entry.
///
/// Called after the victim has left the store and before the incoming entry
/// is written. Explicit deletes do not notify.
pub trait DiscardListener<K> {
    fn on_discard(&mut self, key: &K);
}

/// A [`DiscardListener`] backed by a closure.
pub struct FnListener<F>(pub F);

impl<K, F> DiscardListener<K> for FnListener<F>
where
    F: FnMut(&K),
{
    fn on_discard(&mut self, key: &K) {
        (self.0)(key)
    }
}

// == Log Listener ==

/// Default listener: emits a `DISCARD: <key>` tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogListener;

impl<K: fmt::Display> DiscardListener<K> for LogListener {
    fn on_discard(&mut self, key: &K) {
        info!(target: "policy_cache::discard", key = %key, "DISCARD: {}", key);
    }
}
