//! Configuration file loader with position-aware error reporting.
//!
//! Reads TOML from an explicit path or from the XDG location. A missing file
//! at the XDG location yields `Config::default()`.

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
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Self::parse_toml(&content, path)
    }

    /// Load configuration from the default XDG location.
    pub fn load_default() -> Result<Config, ConfigError> {
        let path = xdg::config_path();
        if path.exists() {
            Self::load_from_path(&path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
    }

    /// Explicit path when given, otherwise the XDG location.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::load_default(),
        }
    }

    fn parse_toml(content: &str, path: &Path) -> Result<Config, ConfigError> {
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

/// One-based line and column of byte `offset` in `content`.
fn line_column(content: &str, offset: usize) -> (usize, usize) {
    let before = &content[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|p| p + 1).unwrap_or(0);
    (line, offset - line_start + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogLevel;
    use serial_test::serial;
    use std::path::PathBuf;

    fn with_xdg_config<F: FnOnce()>(dir: &Path, f: F) {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", dir);
        f();
        match original {
            Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    #[test]
    fn parse_partial_config_fills_defaults() {
        let path = PathBuf::from("partial.toml");
        let config = ConfigLoader::parse_toml("[logging]\nlevel = \"warn\"\n", &path)
            .expect("partial config should parse");
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.dashboard.layout, "responsive-grid");
    }

    #[test]
    fn parse_invalid_toml_returns_position() {
        let toml_str = "[dashboard]\ntitle = \n";
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
                assert!(line >= 2, "line {line}");
                assert!(column > 0);
                assert!(!message.is_empty());
            }
            other => panic!("expected ParseError, got: {other:?}"),
        }
    }

    #[test]
    fn parse_wrong_type_is_reported() {
        let path = PathBuf::from("typed.toml");
        let err = ConfigLoader::parse_toml("[dashboard]\ntitle = 5\n", &path)
            .expect_err("integer title should fail");
        assert!(matches!(err, ConfigError::ParseError { line: 2, .. }), "got {err:?}");
    }

    #[test]
    fn line_column_counts_from_one() {
        assert_eq!(line_column("abc", 0), (1, 1));
        assert_eq!(line_column("ab\ncd", 4), (2, 2));
    }

    #[test]
    fn load_from_path_valid_file() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let file = dir.path().join("config.toml");
        fs::write(&file, "[dashboard]\nlayout = \"rows-layout\"\n").expect("write");
        let config = ConfigLoader::load_from_path(&file).expect("should load");
        assert_eq!(config.dashboard.layout, "rows-layout");
    }

    #[test]
    fn load_from_path_missing_file_returns_not_found() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("absent.toml");
        let err = ConfigLoader::load_from_path(&path).expect_err("should fail");
        assert!(matches!(err, ConfigError::NotFound { path: ref p } if *p == path));
    }

    #[test]
    #[serial]
    fn load_default_without_file_returns_defaults() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        with_xdg_config(dir.path(), || {
            let config = ConfigLoader::load_default().expect("defaults");
            assert_eq!(config, Config::default());
        });
    }

    #[test]
    #[serial]
    fn load_default_reads_xdg_file() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let app_dir = dir.path().join("dashboard-layout");
        fs::create_dir_all(&app_dir).expect("mkdir");
        fs::write(app_dir.join("config.toml"), "[dashboard]\ntitle = \"Ops\"\n").expect("write");
        with_xdg_config(dir.path(), || {
            let config = ConfigLoader::load(None).expect("load");
            assert_eq!(config.dashboard.title, "Ops");
        });
    }
}
