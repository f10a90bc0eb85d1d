//! TOML configuration schema types for the posture dashboard.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so a partial (or empty) file is always valid.
//!
//! Duration fields use human-readable strings (e.g. `"250ms"`, `"1s"`)
//! parsed by the `humantime` crate through the typed accessors.

use crate::config::error::ConfigError;
use crate::model::TimeRange;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// ```toml
/// [tui]
/// [log]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Terminal UI settings.
    pub tui: TuiConfig,
    /// Logging settings.
    pub log: LogConfig,
}

impl Config {
    /// Checks the values that parse beyond their TOML type.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tui.tick_rate()?;
        self.tui.time_range()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TUI
// ---------------------------------------------------------------------------

/// Terminal UI behavior.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TuiConfig {
    /// Input poll / redraw tick as a human-readable duration (e.g. `"250ms"`).
    pub tick_rate: String,
    /// Time range selected at startup: `"24h"`, `"7d"`, `"30d"` or `"90d"`.
    pub time_range: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate: "250ms".to_string(),
            time_range: "7d".to_string(),
        }
    }
}

impl TuiConfig {
    /// Parsed `tick_rate`. Zero durations are rejected.
    pub fn tick_rate(&self) -> Result<Duration, ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            field: "tui.tick_rate",
            value: self.tick_rate.clone(),
            message,
        };
        let rate =
            humantime::parse_duration(&self.tick_rate).map_err(|e| invalid(e.to_string()))?;
        if rate.is_zero() {
            return Err(invalid("must be greater than zero".to_string()));
        }
        Ok(rate)
    }

    /// Parsed `time_range`.
    pub fn time_range(&self) -> Result<TimeRange, ConfigError> {
        self.time_range
            .parse::<TimeRange>()
            .map_err(|message| ConfigError::InvalidValue {
                field: "tui.time_range",
                value: self.time_range.clone(),
                message,
            })
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Logging configuration from the `[log]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Logging verbosity when `PDASH_LOG` is unset.
    pub level: LogLevel,
    /// Path to the log file. Empty string disables logging, since the
    /// terminal is owned by the dashboard.
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file: String::new(),
        }
    }
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// The level as an `EnvFilter` directive.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
