//! Script Module
//!
//! Drives a cache from a JSON-lines script. Lookups, dumps and eviction
//! notices share one output stream so they appear in the order they happen.
//!
//! # Output Lines
//! - `DISCARD: {key}` - an entry was evicted
//! - `{key}: {value}` / `{key}: None` - result of a `get`
//! - `Current cache:` followed by `{key}: {value}` lines - result of a `print`

mod commands;

use std::io::{BufRead, Write};

use tracing::{debug, info};

pub use commands::Command;

use crate::cache::{DiscardPrinter, FifoCache};
use crate::error::{CacheError, Result};

/// Cache type used by the harness: string pairs, evictions printed to `W`.
pub type ScriptCache<W> = FifoCache<String, String, DiscardPrinter<W>>;

/// Runs every command in `input` against a fresh cache of `capacity`
/// entries, writing results to `output`.
///
/// Blank lines and lines starting with `#` are skipped. Returns the writer
/// once the script is exhausted.
///
/// # Errors
/// Fails on an invalid capacity, an unparsable line, or an I/O error.
pub fn run<R, W>(input: R, output: W, capacity: usize) -> Result<W>
where
    R: BufRead,
    W: Write,
{
    let mut cache: ScriptCache<W> =
        FifoCache::with_listener(capacity, DiscardPrinter::new(output))?;
    let mut executed = 0usize;

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let command = Command::parse(trimmed).map_err(|source| CacheError::InvalidCommand {
            line: idx + 1,
            source,
        })?;
        debug!(line = idx + 1, ?command, "executing command");
        execute(&mut cache, command)?;
        executed += 1;
    }

    info!(executed, entries = cache.len(), "script finished");

    let mut output = cache.into_listener().into_inner();
    output.flush()?;
    Ok(output)
}

/// Applies one command to the cache.
///
/// # Errors
/// Fails when any output line, eviction notices included, cannot be written.
pub fn execute<W: Write>(cache: &mut ScriptCache<W>, command: Command) -> Result<()> {
    match command {
        Command::Put { key, value } => {
            cache.put_optional(key, value);
            if let Some(err) = cache.listener_mut().take_error() {
                return Err(CacheError::Io(err));
            }
        }
        Command::Get { key } => {
            let line = match cache.get(key.as_str()) {
                Some(value) => format!("{}: {}", key, value),
                None => format!("{}: None", key),
            };
            writeln!(cache.listener_mut().get_mut(), "{}", line)?;
        }
        Command::Print => {
            let dump = cache.to_string();
            cache.listener_mut().get_mut().write_all(dump.as_bytes())?;
        }
    }
    Ok(())
}
