//! FIFO Cache - A bounded in-memory key-value cache
//!
//! Holds a fixed number of entries and discards the oldest-inserted one
//! when a new key arrives at a full cache.

pub mod cache;
pub mod config;
pub mod error;
pub mod script;

pub use cache::{CachePolicy, FifoCache, MAX_ITEMS};
pub use config::Config;
pub use error::{CacheError, Result};
