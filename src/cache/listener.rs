//! Eviction Listener Module
//!
//! Receives a notification each time the cache discards its oldest entry.

use std::fmt::Display;
use std::io::{self, Write};

use tracing::warn;

// == Eviction Listener ==
/// Notified with the discarded key at the moment of eviction, before the
/// incoming entry is stored.
pub trait EvictionListener<K> {
    fn on_evict(&mut self, key: &K);
}

/// Records evicted keys in eviction order.
impl<K: Clone> EvictionListener<K> for Vec<K> {
    fn on_evict(&mut self, key: &K) {
        self.push(key.clone());
    }
}

// == Discard Printer ==
/// Writes a `DISCARD: {key}` line per eviction.
///
/// Eviction cannot fail, so the first write error is kept until the owner
/// collects it with [`take_error`](DiscardPrinter::take_error).
#[derive(Debug)]
pub struct DiscardPrinter<W = io::Stdout> {
    writer: W,
    /// First write failure not yet collected
    error: Option<io::Error>,
}

impl DiscardPrinter<io::Stdout> {
    /// Creates a printer writing to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for DiscardPrinter<io::Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> DiscardPrinter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Returns the first unreported write failure, clearing it.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<K: Display, W: Write> EvictionListener<K> for DiscardPrinter<W> {
    fn on_evict(&mut self, key: &K) {
        if let Err(err) = writeln!(self.writer, "DISCARD: {}", key) {
            warn!(error = %err, "failed to write eviction notice");
            self.error.get_or_insert(err);
        }
    }
}
