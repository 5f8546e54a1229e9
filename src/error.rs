//! Error types for the cache
//!
//! Cache reads and writes never fail; these cover construction and the
//! script harness.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the crate.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Capacity must allow at least one entry
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// A script line could not be parsed as a command
    #[error("Invalid command on line {line}: {source}")]
    InvalidCommand {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Reading the script or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, CacheError>;
