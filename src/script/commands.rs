//! Script Command DTOs
//!
//! Defines the JSON shape of one line of a cache script.

use serde::Deserialize;

/// One cache operation, tagged by `op`.
///
/// ```json
/// {"op":"put","key":"A","value":"1"}
/// {"op":"get","key":"A"}
/// {"op":"print"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Command {
    /// Store a pair. Either side may be `null` or missing, which makes the
    /// write a no-op.
    Put {
        #[serde(default)]
        key: Option<String>,
        #[serde(default)]
        value: Option<String>,
    },
    /// Read a key
    Get { key: String },
    /// Dump the cache contents
    Print,
}

impl Command {
    /// Parses a single script line.
    pub fn parse(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }
}
