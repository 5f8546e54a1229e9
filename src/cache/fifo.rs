//! FIFO Cache Module
//!
//! Main cache engine combining HashMap storage with insertion-order tracking.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::cache::{CachePolicy, DiscardPrinter, EvictionListener, InsertionOrder, MAX_ITEMS};
use crate::error::{CacheError, Result};

// == FIFO Cache ==
/// Bounded cache that discards the oldest-inserted entry when full.
///
/// Reads never affect eviction order and overwriting a key keeps its
/// original slot. Every key in `order` is live in `entries` and vice versa.
#[derive(Debug)]
pub struct FifoCache<K, V, L = DiscardPrinter> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// Insertion order, oldest first
    order: InsertionOrder<K>,
    /// Eviction notification sink
    listener: L,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, V> FifoCache<K, V> {
    // == Constructor ==
    /// Creates a cache holding [`MAX_ITEMS`] entries that prints evictions
    /// to stdout.
    pub fn new() -> Self {
        Self::from_parts(MAX_ITEMS, DiscardPrinter::stdout())
    }

    /// Creates a stdout-printing cache with a custom capacity.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_listener(capacity, DiscardPrinter::stdout())
    }
}

impl<K, V> Default for FifoCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, L> FifoCache<K, V, L> {
    /// Creates a cache that reports evictions to `listener`.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn with_listener(capacity: usize, listener: L) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }
        Ok(Self::from_parts(capacity, listener))
    }

    fn from_parts(capacity: usize, listener: L) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            order: InsertionOrder::with_capacity(capacity),
            listener,
            capacity,
        }
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Listener Access ==
    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Consumes the cache, returning its listener.
    pub fn into_listener(self) -> L {
        self.listener
    }

    // == Peek Oldest ==
    /// Returns the key that the next eviction would discard.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.order.peek_oldest()
    }

    /// Iterates live keys from oldest to newest.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    // == Clear ==
    /// Drops every entry without notifying the listener.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

impl<K, V, L> FifoCache<K, V, L>
where
    K: Eq + Hash + Clone,
    L: EvictionListener<K>,
{
    // == Put ==
    /// Stores a key-value pair.
    ///
    /// If the key already exists, the value is overwritten in place and no
    /// eviction happens. If the cache is full, the oldest entry is evicted
    /// and reported before the new entry is stored.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = value;
            trace!("overwrote existing entry");
            return;
        }

        if self.entries.len() >= self.capacity {
            self.evict_oldest();
        }

        debug_assert!(!self.order.contains(&key), "key already tracked");
        self.entries.insert(key.clone(), value);
        self.order.record(key);
        debug_assert_eq!(self.order.len(), self.entries.len());
        trace!(len = self.entries.len(), "stored new entry");
    }

    /// Stores the pair only when both key and value are present.
    pub fn put_optional(&mut self, key: Option<K>, value: Option<V>) {
        if let (Some(key), Some(value)) = (key, value) {
            self.put(key, value);
        }
    }

    // == Get ==
    /// Retrieves a value by key without touching eviction order.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    // == Evict Oldest ==
    fn evict_oldest(&mut self) {
        if let Some(oldest) = self.order.evict_oldest() {
            self.entries.remove(&oldest);
            debug!(capacity = self.capacity, "evicted oldest entry");
            self.listener.on_evict(&oldest);
        }
    }
}

impl<K, V, L> CachePolicy<K, V> for FifoCache<K, V, L>
where
    K: Eq + Hash + Clone,
    L: EvictionListener<K>,
{
    fn put(&mut self, key: K, value: V) {
        FifoCache::put(self, key, value);
    }

    fn get(&self, key: &K) -> Option<&V> {
        FifoCache::get(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        FifoCache::contains_key(self, key)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

// == Display ==
/// Renders `Current cache:` followed by one `key: value` line per entry,
/// sorted by key.
impl<K, V, L> fmt::Display for FifoCache<K, V, L>
where
    K: Ord + fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current cache:")?;
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));
        for (key, value) in sorted {
            writeln!(f, "{}: {}", key, value)?;
        }
        Ok(())
    }
}
