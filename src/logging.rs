//! Logging initialization for the posture dashboard.
//!
//! Configures the `tracing` subscriber with level filtering via the `PDASH_LOG`
//! environment variable, falling back to the `[log] level` config value.
//!
//! The dashboard owns the terminal, so log lines never go to stdout or
//! stderr. They are appended to `[log] file` when set and discarded otherwise.
//!
//! # Usage
//!
//! ```bash
//! # Debug level for this crate only
//! PDASH_LOG=posture_dashboard=debug pdash
//! ```

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::schema::LogConfig;
use crate::config::xdg;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "PDASH_LOG";

/// Errors raised while installing the subscriber.
#[derive(Error, Debug)]
pub enum LoggingError {
    /// The log file could not be opened for appending.
    #[error("Failed to open log file {path}: {source}")]
    OpenFile {
        /// Expanded log file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A global subscriber is already installed.
    #[error("Failed to install log subscriber: {0}")]
    Install(String),
}

/// Builds the filter from `PDASH_LOG`, or from `config.level` when the
/// variable is unset or invalid.
pub fn build_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(config.level.as_directive()))
}

/// Initialize the global tracing subscriber. Call once at startup.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    let filter = build_filter(config);
    let writer = match log_file_path(config) {
        Some(path) => BoxMakeWriter::new(Mutex::new(open_log_file(&path)?)),
        None => BoxMakeWriter::new(std::io::sink),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}

/// Expanded `[log] file`, or `None` when logging is disabled.
fn log_file_path(config: &LogConfig) -> Option<PathBuf> {
    let file = config.file.trim();
    if file.is_empty() {
        None
    } else {
        Some(xdg::expand_tilde(file))
    }
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    let open_error = |source| LoggingError::OpenFile {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        xdg::ensure_dir(parent).map_err(open_error)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_error)
}
