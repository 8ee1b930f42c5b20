//! File-backed tracing setup. The terminal belongs to the TUI while it runs,
//! so diagnostics never go to stdout or stderr.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::LogConfig;

/// Install the global subscriber. Passing `None` leaves tracing without a
/// subscriber, which turns every macro into a no-op. An error leaves tracing
/// in that same state, so callers may report it and carry on.
pub fn init(config: Option<&LogConfig>) -> Result<()> {
    let Some(config) = config else {
        return Ok(());
    };

    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("failed to create log directory")?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)
        .with_context(|| format!("failed to open log file {}", config.path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(config.level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("failed to install log subscriber")?;

    info!(path = %config.path.display(), "logging initialized");
    Ok(())
}
