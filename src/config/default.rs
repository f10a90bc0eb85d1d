//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()`
//! and functions to write it to the XDG config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Posture Dashboard Configuration
#
# All values shown below are the built-in defaults.
# Modify options to customize the dashboard.
#
# Location: $XDG_CONFIG_HOME/posture-dashboard/config.toml

# ==============================================================================
# TUI Configuration
# ==============================================================================

[tui]

# Input poll and redraw tick as a human-readable duration.
# Examples: "100ms", "250ms", "1s"
tick_rate = "250ms"

# Time range selected at startup. Press `t` in the dashboard to cycle it.
# Options: "24h", "7d", "30d", "90d"
time_range = "7d"

# ==============================================================================
# Logging
# ==============================================================================

[log]

# Logging verbosity. The PDASH_LOG environment variable takes precedence
# and accepts full tracing filter directives (e.g. "posture_dashboard=debug").
# Options: "error", "warn", "info", "debug", "trace"
level = "info"

# Path to the log file. Tilde (~) is expanded to the home directory.
# Empty string disables logging, since the dashboard owns the terminal.
# Example: "~/.local/state/posture-dashboard/pdash.log"
file = ""
"#;

/// Creates (or force-overwrites) the default config file.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, it is moved to `config.toml.backup` first.
///
/// Returns the path where the config was written.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();

    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists { path });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(&path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(&path)?;
    Ok(path)
}

/// Writes the template to `path`, creating the config dir and setting 0600 permissions.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |source| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    xdg::ensure_config_dir().map_err(write_error)?;
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_error)?;
    }

    Ok(())
}
