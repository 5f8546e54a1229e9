//! FIFO Cache - script runner
//!
//! Reads JSON-lines cache commands from stdin and writes lookups, dumps and
//! eviction notices to stdout. Logs go to stderr.

use std::io;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fifo_cache::{script, Config};

/// Main entry point for the script runner.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Run the script from stdin against a fresh cache
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fifo_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!("Configuration loaded: max_items={}", config.max_items);

    let stdin = io::stdin();
    script::run(stdin.lock(), io::stdout().lock(), config.max_items)
        .context("failed to run cache script")?;

    Ok(())
}
