//! Cache Policy Module
//!
//! The contract shared by bounded caches, independent of eviction strategy.

// == Cache Policy ==
/// A bounded key-value store that picks its own eviction victims.
///
/// Implementors never hold more than [`capacity`](CachePolicy::capacity)
/// entries. Absent keys read as `None`.
pub trait CachePolicy<K, V> {
    /// Stores `value` under `key`, evicting according to the policy when a
    /// new key arrives at a full cache.
    fn put(&mut self, key: K, value: V);

    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &K) -> Option<&V>;

    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Number of live entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of live entries.
    fn capacity(&self) -> usize;
}
