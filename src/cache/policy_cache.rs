//! Policy Cache Module
//!
//! Public cache facade: bounded storage plus a pluggable eviction policy and
//! a discard listener.

use std::fmt;
use std::hash::Hash;

use tracing::{debug, warn};

use crate::cache::listener::{DiscardListener, FnListener, LogListener};
use crate::cache::policy::{EvictionPolicy, PolicyTracker, Tracker};
use crate::cache::{BoundedStore, CacheEntry, CacheStats};
use crate::config::{validate_capacity, Config};
use crate::error::{CacheError, Result};

// == Policy Cache ==
/// Bounded key/value cache that evicts according to an [`EvictionPolicy`].
///
/// The cache is single-threaded; wrap it in a `Mutex` to share it.
pub struct PolicyCache<K, V> {
    /// Key-value storage
    store: BoundedStore<K, V>,
    /// Bookkeeping for the active eviction policy
    policy: Tracker<K>,
    /// Receives every evicted key
    listener: Box<dyn DiscardListener<K>>,
    /// Performance statistics
    stats: CacheStats,
}

impl<K, V> PolicyCache<K, V>
where
    K: Hash + Eq + Clone + fmt::Display,
{
    // == Constructor ==
    /// Creates an empty cache that logs discards through `tracing`.
    ///
    /// # Arguments
    /// * `max_items` - Maximum number of entries; must be positive
    /// * `policy` - Which entry to sacrifice when the cache is full
    ///
    /// # Errors
    /// `CacheError::Configuration` if `max_items` is zero.
    pub fn new(max_items: usize, policy: EvictionPolicy) -> Result<Self> {
        validate_capacity(max_items)?;

        Ok(Self {
            store: BoundedStore::new(max_items),
            policy: policy.tracker(),
            listener: Box::new(LogListener),
            stats: CacheStats::new(),
        })
    }

    /// Creates an empty cache from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.max_items, config.policy)
    }

    /// Creates an empty cache that hands every evicted key to `on_discard`.
    pub fn with_listener<F>(
        max_items: usize,
        policy: EvictionPolicy,
        on_discard: F,
    ) -> Result<Self>
    where
        F: FnMut(&K) + 'static,
    {
        let mut cache = Self::new(max_items, policy)?;
        cache.set_listener(FnListener(on_discard));
        Ok(cache)
    }

    /// Replaces the discard listener.
    pub fn set_listener<L>(&mut self, listener: L)
    where
        L: DiscardListener<K> + 'static,
    {
        self.listener = Box::new(listener);
    }

    // == Put ==
    /// Stores a key-value pair.
    ///
    /// Overwriting a resident key never evicts. A new key arriving while the
    /// cache is full first evicts the policy's victim.
    ///
    /// # Returns
    /// The evicted key, if any.
    pub fn put(&mut self, key: K, value: V) -> Result<Option<K>> {
        if self.store.contains(&key) {
            self.policy.record_overwrite(&key);
            self.store.insert_or_update(key, value);
            return Ok(None);
        }

        let evicted = if self.store.is_full() {
            Some(self.evict()?)
        } else {
            None
        };

        self.policy.record_insert(&key);
        self.store.insert_or_update(key, value);

        Ok(evicted)
    }

    /// Stores a key-value pair whose parts may be absent.
    ///
    /// A missing key or value leaves the cache untouched and is not an error.
    pub fn put_opt(&mut self, key: Option<K>, value: Option<V>) -> Result<Option<K>> {
        match CacheEntry::try_new(key, value) {
            Ok(entry) => {
                let (key, value) = entry.into_parts();
                self.put(key, value)
            }
            Err(err) => {
                debug!(error = %err, "ignoring put");
                self.stats.record_ignored_put();
                Ok(None)
            }
        }
    }

    // == Get ==
    /// Retrieves a value by key, counting as a use for the active policy.
    ///
    /// # Errors
    /// `CacheError::NotFound` if the key is not resident. Nothing changes.
    pub fn get(&mut self, key: &K) -> Result<&V> {
        if !self.store.contains(key) {
            self.stats.record_lookup(false);
            return Err(CacheError::NotFound(key.to_string()));
        }

        self.policy.record_access(key);
        self.stats.record_lookup(true);
        self.store
            .lookup(key)
            .ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    /// Retrieves a value by a key that may be absent.
    pub fn get_opt(&mut self, key: Option<&K>) -> Result<&V> {
        match key {
            Some(key) => self.get(key),
            None => {
                self.stats.record_lookup(false);
                Err(CacheError::NotFound("<none>".to_string()))
            }
        }
    }

    // == Delete ==
    /// Removes an entry by key without notifying the discard listener.
    pub fn delete(&mut self, key: &K) -> Result<V> {
        match self.store.delete(key) {
            Some(value) => {
                self.policy.record_remove(key);
                Ok(value)
            }
            None => Err(CacheError::NotFound(key.to_string())),
        }
    }

    /// Checks residency without touching policy state.
    pub fn contains(&self, key: &K) -> bool {
        self.store.contains(key)
    }

    /// Drops every entry and all policy bookkeeping. Statistics are kept.
    pub fn clear(&mut self) {
        self.store.clear();
        self.policy.clear();
    }

    // == Eviction ==
    fn evict(&mut self) -> Result<K> {
        let victim = match self.policy.select_victim() {
            Some(victim) if self.store.contains(&victim) => victim,
            other => {
                warn!(
                    policy = %self.policy.policy(),
                    victim = ?other.as_ref().map(ToString::to_string),
                    "policy did not name a resident victim"
                );
                return Err(CacheError::CacheFull(format!(
                    "{} policy could not select a victim",
                    self.policy.policy()
                )));
            }
        };

        self.store.delete(&victim);
        self.policy.record_remove(&victim);
        self.stats.record_eviction();
        debug!(policy = %self.policy.policy(), key = %victim, "evicted entry");
        self.listener.on_discard(&victim);

        Ok(victim)
    }
}

impl<K, V> PolicyCache<K, V> {
    /// Returns the current number of entries.
    pub fn count(&self) -> usize {
        self.store.count()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.store.max_items()
    }

    pub fn policy(&self) -> EvictionPolicy
    where
        K: Hash + Eq + Clone,
    {
        self.policy.policy()
    }

    /// Read-only view of the policy bookkeeping.
    pub fn tracker(&self) -> &Tracker<K> {
        &self.policy
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.store.count())
    }
}

impl<K: Ord, V> PolicyCache<K, V> {
    /// Resident entries ordered by key.
    pub fn sorted_entries(&self) -> Vec<CacheEntry<&K, &V>>
    where
        K: Hash + Eq,
    {
        let mut entries: Vec<_> = self
            .store
            .iter()
            .map(|(k, v)| CacheEntry::new(k, v))
            .collect();
        entries.sort_by(|a, b| a.key.cmp(b.key));
        entries
    }
}

impl<K, V> fmt::Display for PolicyCache<K, V>
where
    K: Hash + Eq + Ord + fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current cache:")?;
        for entry in self.sorted_entries() {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for PolicyCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyCache")
            .field("store", &self.store)
            .field("policy", &self.policy)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_cache(
        max_items: usize,
        policy: EvictionPolicy,
    ) -> (PolicyCache<String, String>, Rc<RefCell<Vec<String>>>) {
        let discarded = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&discarded);
        let cache = PolicyCache::with_listener(max_items, policy, move |key: &String| {
            sink.borrow_mut().push(key.clone())
        })
        .unwrap();
        (cache, discarded)
    }

    fn put(cache: &mut PolicyCache<String, String>, key: &str) -> Option<String> {
        cache.put(key.to_string(), format!("value_{}", key)).unwrap()
    }

    fn get(cache: &mut PolicyCache<String, String>, key: &str) -> Result<String> {
        cache.get(&key.to_string()).cloned()
    }

    fn occupancy<K, V>(cache: &PolicyCache<K, V>) -> (usize, usize, bool) {
        (cache.count(), cache.capacity(), cache.is_empty())
    }

    #[test]
    fn test_occupancy_without_key_bounds() {
        let mut cache = PolicyCache::new(3, EvictionPolicy::Lifo).unwrap();
        assert_eq!(occupancy(&cache), (0, 3, true));

        cache.put("k1", 1).unwrap();
        cache.put("k2", 2).unwrap();
        assert_eq!(occupancy(&cache), (2, 3, false));
        assert_eq!(cache.stats().total_entries, 2);
    }

    #[test]
    fn test_lifo_capacity_three_overwrite_then_insert() {
        let (mut cache, discarded) = recording_cache(3, EvictionPolicy::Lifo);
        put(&mut cache, "a");
        put(&mut cache, "b");
        put(&mut cache, "c");
        put(&mut cache, "a");

        assert_eq!(put(&mut cache, "d"), Some("a".to_string()));
        assert_eq!(put(&mut cache, "e"), Some("d".to_string()));
        assert_eq!(*discarded.borrow(), vec!["a", "d"]);
    }

    #[test]
    fn test_lfu_tie_at_two_then_new_key_is_next() {
        let (mut cache, _) = recording_cache(2, EvictionPolicy::Lfu);
        put(&mut cache, "a");
        put(&mut cache, "b");
        get(&mut cache, "a").unwrap();
        get(&mut cache, "b").unwrap();

        assert_eq!(put(&mut cache, "c"), Some("a".to_string()));
        assert_eq!(put(&mut cache, "d"), Some("c".to_string()));
    }

    #[test]
    fn test_capacity_one_every_policy() {
        for policy in EvictionPolicy::ALL {
            let (mut cache, discarded) = recording_cache(1, policy);
            put(&mut cache, "a");
            assert_eq!(put(&mut cache, "b"), Some("a".to_string()), "{} policy", policy);
            assert_eq!(get(&mut cache, "b").unwrap(), "value_b");
            assert_eq!(cache.count(), 1);
            assert_eq!(*discarded.borrow(), vec!["a"]);
        }
    }

    #[test]
    fn test_cache_rejects_zero_capacity() {
        let result = PolicyCache::<String, String>::new(0, EvictionPolicy::Lru);
        assert!(matches!(result, Err(CacheError::Configuration(_))));
    }

    #[test]
    fn test_cache_put_and_get() {
        let mut cache = PolicyCache::new(4, EvictionPolicy::Fifo).unwrap();

        cache.put("key1".to_string(), "value1".to_string()).unwrap();

        assert_eq!(cache.get(&"key1".to_string()).unwrap(), "value1");
        assert_eq!(cache.count(), 1);
    }

    #[test]
    fn test_cache_get_nonexistent() {
        let mut cache: PolicyCache<String, String> =
            PolicyCache::new(4, EvictionPolicy::Lru).unwrap();

        let result = cache.get(&"nonexistent".to_string());
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[test]
    fn test_cache_overwrite_does_not_evict() {
        for policy in EvictionPolicy::ALL {
            let (mut cache, discarded) = recording_cache(2, policy);
            put(&mut cache, "a");
            put(&mut cache, "b");

            assert_eq!(cache.put("a".to_string(), "new".to_string()).unwrap(), None);

            assert_eq!(cache.count(), 2, "{} policy", policy);
            assert_eq!(get(&mut cache, "a").unwrap(), "new");
            assert!(discarded.borrow().is_empty(), "{} policy", policy);
        }
    }

    #[test]
    fn test_fifo_evicts_first_inserted() {
        let (mut cache, discarded) = recording_cache(4, EvictionPolicy::Fifo);
        for key in ["A", "B", "C", "D"] {
            put(&mut cache, key);
        }
        get(&mut cache, "A").unwrap();

        assert_eq!(put(&mut cache, "E"), Some("A".to_string()));
        assert_eq!(put(&mut cache, "F"), Some("B".to_string()));
        assert_eq!(*discarded.borrow(), vec!["A", "B"]);
    }

    #[test]
    fn test_lifo_evicts_last_inserted() {
        let (mut cache, discarded) = recording_cache(2, EvictionPolicy::Lifo);
        put(&mut cache, "k1");
        put(&mut cache, "k2");

        assert_eq!(put(&mut cache, "k3"), Some("k2".to_string()));
        assert_eq!(put(&mut cache, "k4"), Some("k3".to_string()));
        assert!(cache.contains(&"k1".to_string()));
        assert_eq!(*discarded.borrow(), vec!["k2", "k3"]);
    }

    #[test]
    fn test_lifo_overwrite_moves_marker() {
        let (mut cache, _) = recording_cache(2, EvictionPolicy::Lifo);
        put(&mut cache, "k1");
        put(&mut cache, "k2");
        put(&mut cache, "k1");

        assert_eq!(put(&mut cache, "k3"), Some("k1".to_string()));
    }

    #[test]
    fn test_lru_evicts_least_recently_used() {
        let (mut cache, _) = recording_cache(2, EvictionPolicy::Lru);
        put(&mut cache, "k1");
        put(&mut cache, "k2");
        get(&mut cache, "k1").unwrap();

        assert_eq!(put(&mut cache, "k3"), Some("k2".to_string()));
        assert!(cache.contains(&"k1".to_string()));
    }

    #[test]
    fn test_mru_evicts_most_recently_used() {
        let (mut cache, _) = recording_cache(2, EvictionPolicy::Mru);
        put(&mut cache, "k1");
        put(&mut cache, "k2");
        get(&mut cache, "k2").unwrap();

        assert_eq!(put(&mut cache, "k3"), Some("k2".to_string()));
        // The incoming key is now the most recent
        assert_eq!(put(&mut cache, "k4"), Some("k3".to_string()));
        assert!(cache.contains(&"k1".to_string()));
    }

    #[test]
    fn test_lfu_evicts_least_frequent() {
        let (mut cache, _) = recording_cache(2, EvictionPolicy::Lfu);
        put(&mut cache, "k1");
        put(&mut cache, "k2");
        get(&mut cache, "k1").unwrap();
        get(&mut cache, "k1").unwrap();
        get(&mut cache, "k2").unwrap();

        assert_eq!(put(&mut cache, "k3"), Some("k2".to_string()));
    }

    #[test]
    fn test_lfu_tie_evicts_older_use() {
        let (mut cache, _) = recording_cache(2, EvictionPolicy::Lfu);
        put(&mut cache, "k1");
        put(&mut cache, "k2");
        get(&mut cache, "k2").unwrap();
        get(&mut cache, "k1").unwrap();

        assert_eq!(put(&mut cache, "k3"), Some("k2".to_string()));
    }

    #[test]
    fn test_lfu_overwrite_counts_as_use() {
        let (mut cache, _) = recording_cache(2, EvictionPolicy::Lfu);
        put(&mut cache, "k1");
        put(&mut cache, "k2");
        put(&mut cache, "k1");

        assert_eq!(put(&mut cache, "k3"), Some("k2".to_string()));
    }

    #[test]
    fn test_put_opt_ignores_missing_parts() {
        let (mut cache, discarded) = recording_cache(1, EvictionPolicy::Fifo);
        put(&mut cache, "k1");

        assert_eq!(cache.put_opt(None, Some("v".to_string())).unwrap(), None);
        assert_eq!(cache.put_opt(Some("k2".to_string()), None).unwrap(), None);
        assert_eq!(cache.put_opt(None, None).unwrap(), None);

        assert_eq!(cache.count(), 1);
        assert!(cache.contains(&"k1".to_string()));
        assert!(discarded.borrow().is_empty());
        assert_eq!(cache.stats().ignored_puts, 3);
    }

    #[test]
    fn test_put_opt_with_both_parts_stores() {
        let mut cache = PolicyCache::new(2, EvictionPolicy::Lru).unwrap();

        cache.put_opt(Some("k1"), Some(1)).unwrap();
        assert_eq!(cache.get(&"k1"), Ok(&1));
    }

    #[test]
    fn test_get_opt_none_is_not_found() {
        let mut cache = PolicyCache::new(2, EvictionPolicy::Lfu).unwrap();
        cache.put("k1", 1).unwrap();

        assert!(matches!(cache.get_opt(None), Err(CacheError::NotFound(_))));
        assert_eq!(cache.get_opt(Some(&"k1")), Ok(&1));
    }

    #[test]
    fn test_get_miss_does_not_touch_policy() {
        let (mut cache, _) = recording_cache(2, EvictionPolicy::Lfu);
        put(&mut cache, "k1");
        put(&mut cache, "k2");
        let before = format!("{:?}", cache.tracker());

        assert!(get(&mut cache, "ghost").is_err());

        assert_eq!(format!("{:?}", cache.tracker()), before);
    }

    #[test]
    fn test_delete_does_not_notify() {
        let (mut cache, discarded) = recording_cache(2, EvictionPolicy::Lru);
        put(&mut cache, "k1");

        assert_eq!(cache.delete(&"k1".to_string()).unwrap(), "value_k1");
        assert!(matches!(
            cache.delete(&"k1".to_string()),
            Err(CacheError::NotFound(_))
        ));
        assert!(discarded.borrow().is_empty());
        assert!(cache.tracker().is_empty());
    }

    #[test]
    fn test_lifo_after_marker_deleted() {
        let (mut cache, _) = recording_cache(2, EvictionPolicy::Lifo);
        put(&mut cache, "k1");
        put(&mut cache, "k2");
        cache.delete(&"k2".to_string()).unwrap();

        assert_eq!(put(&mut cache, "k3"), None);
        assert_eq!(put(&mut cache, "k4"), Some("k3".to_string()));
    }

    #[test]
    fn test_clear() {
        let (mut cache, _) = recording_cache(2, EvictionPolicy::Mru);
        put(&mut cache, "k1");
        put(&mut cache, "k2");
        cache.clear();

        assert!(cache.is_empty());
        assert!(cache.tracker().is_empty());
        assert_eq!(put(&mut cache, "k3"), None);
    }

    #[test]
    fn test_stats() {
        let (mut cache, _) = recording_cache(1, EvictionPolicy::Fifo);
        put(&mut cache, "k1");
        get(&mut cache, "k1").unwrap();
        let _ = get(&mut cache, "nonexistent");
        put(&mut cache, "k2");

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.total_entries, 1);

        cache.delete(&"k2".to_string()).unwrap();
        assert_eq!(cache.stats().total_entries, 0);
        put(&mut cache, "k3");
        cache.clear();
        assert_eq!(cache.stats().total_entries, 0);
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_display_sorted() {
        let mut cache = PolicyCache::new(4, EvictionPolicy::Fifo).unwrap();
        cache.put("C", "Street").unwrap();
        cache.put("A", "Hello").unwrap();
        cache.put("B", "World").unwrap();

        assert_eq!(
            cache.to_string(),
            "Current cache:\nA: Hello\nB: World\nC: Street\n"
        );
    }
}
