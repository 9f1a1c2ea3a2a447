//! Logging setup.
//!
//! The terminal is in raw mode on the alternate screen while the game runs, so
//! log records never go to stderr. With a log path they are appended to that
//! file; without one logging stays disabled.

use std::fs::OpenOptions;

use anyhow::{Context, Result};

/// Initialise `env_logger`, writing to `path`. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing logger")?;
    Ok(())
}
