//! Configuration file loader with position-aware error reporting.
//!
//! An explicit path must exist. The default XDG location may be absent,
//! in which case `Config::default()` is used.

use std::fs;
use std::path::Path;

use crate::config::error::ConfigError;
use crate::config::schema::Config;
use crate::config::xdg;

/// Stateless configuration loader.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a specific path.
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist, or
    /// `ConfigError::ReadError` for other I/O failures.
    pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        let config = Self::parse_toml(&content, path)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the default XDG location, or defaults if absent.
    pub fn load_default() -> Result<Config, ConfigError> {
        let path = xdg::config_path();
        if path.exists() {
            Self::load_from_path(&path)
        } else {
            tracing::debug!("no config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Loads `path` when given, otherwise the default location.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(p) => Self::load_from_path(p),
            None => Self::load_default(),
        }
    }

    /// Parse a TOML string into `Config`, reporting 1-based line and column.
    ///
    /// Line and column are 0 when the parser gives no span.
    pub(crate) fn parse_toml(content: &str, path: &Path) -> Result<Config, ConfigError> {
        toml::from_str(content).map_err(|e| {
            let (line, column) = e
                .span()
                .map(|span| line_column(content, span.start))
                .unwrap_or((0, 0));
            ConfigError::ParseError {
                path: path.to_path_buf(),
                line,
                column,
                message: e.message().to_string(),
            }
        })
    }
}

/// 1-based line and column of byte `offset` in `content`.
fn line_column(content: &str, offset: usize) -> (usize, usize) {
    let before = &content[..offset.min(content.len())];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|p| p + 1).unwrap_or(0);
    (line, before.len() - line_start + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogLevel;
    use crate::config::xdg::tests::with_env;
    use serial_test::serial;
    use std::path::PathBuf;

    // -- parse_toml ---------------------------------------------------------

    #[test]
    fn parse_valid_full_config() {
        let toml_str = r#"
[tui]
tick_rate = "100ms"
time_range = "30d"

[log]
level = "debug"
file = "/tmp/pdash.log"
"#;
        let path = PathBuf::from("test.toml");
        let config = ConfigLoader::parse_toml(toml_str, &path).expect("valid TOML should parse");
        assert_eq!(config.tui.tick_rate, "100ms");
        assert_eq!(config.tui.time_range, "30d");
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.log.file, "/tmp/pdash.log");
    }

    #[test]
    fn parse_empty_string_returns_defaults() {
        let path = PathBuf::from("empty.toml");
        let config =
            ConfigLoader::parse_toml("", &path).expect("empty string should parse to defaults");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parse_partial_config_fills_defaults() {
        let toml_str = "[log]\nlevel = \"warn\"\n";
        let path = PathBuf::from("partial.toml");
        let config = ConfigLoader::parse_toml(toml_str, &path).expect("partial config should parse");
        assert_eq!(config.log.level, LogLevel::Warn);
        assert_eq!(config.tui.tick_rate, "250ms");
        assert_eq!(config.tui.time_range, "7d");
    }

    #[test]
    fn parse_invalid_toml_returns_parse_error_with_position() {
        let toml_str = "[tui]\ntick_rate = \ninvalid";
        let path = PathBuf::from("bad.toml");
        let err = ConfigLoader::parse_toml(toml_str, &path).expect_err("should fail");
        match err {
            ConfigError::ParseError {
                path: p,
                line,
                column,
                message,
            } => {
                assert_eq!(p, path);
                assert!(line >= 2, "error should be past the section header, got line {line}");
                assert!(column > 0);
                assert!(!message.is_empty());
            }
            other => panic!("expected ParseError, got: {other:?}"),
        }
    }

    #[test]
    fn parse_error_for_wrong_type() {
        let toml_str = "[tui]\ntick_rate = 42\n";
        let path = PathBuf::from("wrong_type.toml");
        let err = ConfigLoader::parse_toml(toml_str, &path).expect_err("should fail");
        assert!(matches!(err, ConfigError::ParseError { .. }), "{err:?}");
    }

    #[test]
    fn parse_error_for_unknown_log_level() {
        let toml_str = "[log]\nlevel = \"verbose\"\n";
        let path = PathBuf::from("level.toml");
        let err = ConfigLoader::parse_toml(toml_str, &path).expect_err("should fail");
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn line_column_counts_from_one() {
        let content = "ab\ncd\nef";
        assert_eq!(line_column(content, 0), (1, 1));
        assert_eq!(line_column(content, 4), (2, 2));
        assert_eq!(line_column(content, 6), (3, 1));
    }

    // -- load_from_path -----------------------------------------------------

    #[test]
    fn load_from_path_valid_file() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let file = dir.path().join("config.toml");
        fs::write(&file, "[log]\nlevel = \"trace\"\n").expect("failed to write temp file");
        let config = ConfigLoader::load_from_path(&file).expect("should load");
        assert_eq!(config.log.level, LogLevel::Trace);
    }

    #[test]
    fn load_from_path_missing_file_returns_not_found() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("missing.toml");
        let err = ConfigLoader::load_from_path(&path).expect_err("should fail");
        match err {
            ConfigError::NotFound { path: p } => assert_eq!(p, path),
            other => panic!("expected NotFound, got: {other:?}"),
        }
    }

    #[test]
    fn load_from_path_directory_returns_read_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let err = ConfigLoader::load_from_path(dir.path()).expect_err("should fail");
        match err {
            ConfigError::ReadError { path, .. } => assert_eq!(path, dir.path()),
            other => panic!("expected ReadError, got: {other:?}"),
        }
    }

    // -- load_default -------------------------------------------------------

    #[test]
    #[serial]
    fn load_default_with_no_file_returns_defaults() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let xdg_home = dir.path().to_str().expect("non-utf8 path");
        with_env(&[("XDG_CONFIG_HOME", Some(xdg_home))], || {
            let config = ConfigLoader::load_default().expect("should return defaults");
            assert_eq!(config, Config::default());
        });
    }

    #[test]
    #[serial]
    fn load_default_with_existing_file_parses_it() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let config_dir = dir.path().join("posture-dashboard");
        fs::create_dir_all(&config_dir).expect("failed to create config dir");
        fs::write(config_dir.join("config.toml"), "[tui]\ntime_range = \"90d\"\n")
            .expect("failed to write config");
        let xdg_home = dir.path().to_str().expect("non-utf8 path");
        with_env(&[("XDG_CONFIG_HOME", Some(xdg_home))], || {
            let config = ConfigLoader::load(None).expect("should load");
            assert_eq!(config.tui.time_range, "90d");
        });
    }

    #[test]
    fn load_with_explicit_path_requires_file() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("nope.toml");
        let err = ConfigLoader::load(Some(&path)).expect_err("should fail");
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }
}
