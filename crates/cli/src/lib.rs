//! Command implementations for the `poo-learning` CLI.
//!
//! The binary in `main.rs` only parses arguments and dispatches here, so every
//! command can be exercised directly from tests.

pub mod commands;

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Logs go to stderr so stdout stays clean for `--json` consumers. `RUST_LOG`
/// takes precedence over the `verbose` default.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
