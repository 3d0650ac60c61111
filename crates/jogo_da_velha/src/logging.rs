//! Tracing subscriber setup.

use crate::settings::LoggingSettings;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Builds the filter from `RUST_LOG`, falling back to the configured directive.
fn env_filter(logging: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(logging.filter()))
}

/// Sends logs to the configured file so they do not interfere with the TUI.
pub fn init_file(logging: &LoggingSettings) -> Result<()> {
    let log_file = std::fs::File::create(logging.file())
        .with_context(|| format!("Failed to create log file {}", logging.file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(logging))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}

/// Sends logs to stderr, keeping stdout for command output.
pub fn init_stderr(logging: &LoggingSettings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(logging))
        .with_writer(std::io::stderr)
        .try_init();
}
