//! Access Order Module
//!
//! Ordered key sequence shared by the FIFO, LRU and MRU trackers.

use std::collections::VecDeque;

// == Access Order ==
/// Keeps keys in the order they were last pushed.
///
/// Keys are stored in a VecDeque where:
/// - Front = Newest
/// - Back = Oldest
#[derive(Debug, Clone)]
pub struct AccessOrder<K> {
    order: VecDeque<K>,
}

impl<K: PartialEq + Clone> AccessOrder<K> {
    // == Constructor ==
    /// Creates a new empty order.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Push Newest ==
    /// Appends a key at the newest end without checking for duplicates.
    ///
    /// Callers must only push keys that are not already tracked.
    pub fn push_newest(&mut self, key: &K) {
        self.order.push_front(key.clone());
    }

    // == Touch ==
    /// Moves a key to the newest end, adding it if it is not tracked.
    pub fn touch(&mut self, key: &K) {
        self.remove(key);
        self.order.push_front(key.clone());
    }

    // == Remove ==
    /// Removes a key from the order. Unknown keys are ignored.
    pub fn remove(&mut self, key: &K) {
        self.order.retain(|k| k != key);
    }

    pub fn oldest(&self) -> Option<&K> {
        self.order.back()
    }

    pub fn newest(&self) -> Option<&K> {
        self.order.front()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.order.iter().any(|k| k == key)
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }
}

impl<K: PartialEq + Clone> Default for AccessOrder<K> {
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn keys(order: &AccessOrder<&'static str>) -> Vec<&'static str> {
        order.order.iter().rev().copied().collect()
    }

    #[test]
    fn test_order_new() {
        let order: AccessOrder<String> = AccessOrder::new();
        assert!(order.is_empty());
        assert_eq!(order.oldest(), None);
        assert_eq!(order.newest(), None);
    }

    #[test]
    fn test_push_newest_keeps_insertion_order() {
        let mut order = AccessOrder::new();
        order.push_newest(&"a");
        order.push_newest(&"b");
        order.push_newest(&"c");

        assert_eq!(order.oldest(), Some(&"a"));
        assert_eq!(order.newest(), Some(&"c"));
        assert_eq!(keys(&order), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_touch_moves_to_newest() {
        let mut order = AccessOrder::new();
        order.touch(&"a");
        order.touch(&"b");
        order.touch(&"c");

        order.touch(&"a");

        assert_eq!(order.len(), 3);
        assert_eq!(order.oldest(), Some(&"b"));
        assert_eq!(order.newest(), Some(&"a"));
    }

    #[test]
    fn test_touch_same_key_multiple_times() {
        let mut order = AccessOrder::new();
        order.touch(&"key1");
        order.touch(&"key1");
        order.touch(&"key1");

        assert_eq!(order.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut order = AccessOrder::new();
        order.push_newest(&"a");
        order.push_newest(&"b");
        order.push_newest(&"c");

        order.remove(&"b");
        order.remove(&"nonexistent");

        assert_eq!(keys(&order), vec!["a", "c"]);
        assert!(!order.contains(&"b"));
    }

    #[test]
    fn test_order_after_multiple_touches() {
        // touch(a), touch(b), touch(c) -> oldest..newest = [a, b, c]
        // touch(a) -> [b, c, a]; touch(c) -> [b, a, c]; touch(b) -> [a, c, b]
        let mut order = AccessOrder::new();
        for k in ["a", "b", "c", "a", "c", "b"] {
            order.touch(&k);
        }

        assert_eq!(keys(&order), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_clear() {
        let mut order = AccessOrder::new();
        order.push_newest(&"a");
        order.clear();
        assert!(order.is_empty());
    }
}
