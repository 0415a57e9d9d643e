//! Logging init: file under XDG state dir, or fallback to stderr.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,urldefault=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize structured logging to `~/.local/state/urldefault/urldefault.log`.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urldefault")?;
    let log_file_path: PathBuf = xdg_dirs.place_state_file("urldefault.log")?;

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;

    tracing::debug!("logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only (no file). Use when init_logging() fails.
/// Fails if a global subscriber is already installed.
pub fn init_logging_stderr() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))
}
