//! Cache Module
//!
//! Provides a bounded in-memory cache with FIFO eviction.

mod fifo;
mod listener;
mod order;
mod policy;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use fifo::FifoCache;
pub use listener::{DiscardPrinter, EvictionListener};
pub(crate) use order::InsertionOrder;
pub use policy::CachePolicy;

// == Public Constants ==
/// Default maximum number of entries a cache holds
pub const MAX_ITEMS: usize = 4;
