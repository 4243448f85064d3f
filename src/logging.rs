//! Tracing subscriber setup.
//!
//! `RUST_LOG` overrides the configured filter. The terminal UI owns the
//! screen, so it only logs when a file is configured.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::LoggingError;

/// Where log lines go when no file is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Stderr,
    Discard,
}

/// Install the global subscriber. Returns `Ok(false)` when nothing was
/// installed because there is no file and the fallback is [`Fallback::Discard`].
pub fn init(config: &LoggingConfig, fallback: Fallback) -> Result<bool, LoggingError> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = match (&config.file, fallback) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| LoggingError::OpenFile {
                    path: path.clone(),
                    source: e,
                })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        (None, Fallback::Stderr) => builder.with_writer(std::io::stderr).try_init(),
        (None, Fallback::Discard) => return Ok(false),
    };

    installed.map_err(|e| LoggingError::Init(e.to_string()))?;
    tracing::debug!(filter = %config.filter, file = ?config.file, "logging initialized");
    Ok(true)
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&config.filter)?),
    }
}
