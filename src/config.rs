//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;

use crate::cache::MAX_ITEMS;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_items: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ITEMS` - Cache capacity (default: 4, zero is ignored)
    pub fn from_env() -> Self {
        Self {
            max_items: env::var("MAX_ITEMS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(MAX_ITEMS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_items: MAX_ITEMS,
        }
    }
}
