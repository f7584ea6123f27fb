//! Log setup. The terminal UI owns stdout, so logs go to a file.

use std::{fs::OpenOptions, path::Path, sync::Arc};

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Send `tracing` output to `path`, appending to any existing log.
///
/// The level comes from `RUST_LOG` and defaults to `info`.
pub fn setup_logging(path: &Path) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Could not open log file {}", path.display()))?;

    let file_log = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_log)
        .try_init()
        .context("Logging was already initialised")?;

    Ok(())
}
