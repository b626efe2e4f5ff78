//! Logging setup for the scs tools.
//!
//! Log lines go to a file under the XDG state dir so admin commands stay
//! quiet on stdout; when that dir is unusable the caller switches to stderr.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,scs=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Path of the log file under the XDG state dir.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("scs")?;
    Ok(xdg_dirs.get_state_home().join("scs").join("scs.log"))
}

/// Initialize logging to `~/.local/state/scs/scs.log`.
///
/// Returns Err when the log file cannot be opened (e.g. unwritable state
/// dir); the caller then falls back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("scs logging initialized at {}", path.display());
    Ok(())
}

/// Stderr-only logging for when the log file is unavailable.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
