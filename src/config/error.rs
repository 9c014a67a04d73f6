//! Errors raised while reading, parsing or writing the dashctl config file.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read dashctl config {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema error. `line` and `column` are one-based, or 0
    /// when the parser gave no position.
    #[error("dashctl config {path}:{line}:{column}: {message}")]
    ParseError {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Raised only for a path given explicitly with `--config`.
    #[error("dashctl config not found: {path}")]
    NotFound { path: PathBuf },

    /// `config init` without `--force` on an existing file.
    #[error("dashctl config already exists: {path} (use --force to replace it)")]
    AlreadyExists { path: PathBuf },

    #[error("cannot write dashctl config {path}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn parse_error_points_at_position() {
        let err = ConfigError::ParseError {
            path: PathBuf::from("dashboard.toml"),
            line: 3,
            column: 17,
            message: "invalid type: integer `4`, expected a string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "dashctl config dashboard.toml:3:17: invalid type: integer `4`, expected a string"
        );
    }

    #[test]
    fn already_exists_suggests_force() {
        let err = ConfigError::AlreadyExists {
            path: PathBuf::from("/home/ops/.config/dashboard-layout/config.toml"),
        };
        let msg = err.to_string();
        assert!(msg.contains("already exists"), "got {msg}");
        assert!(msg.ends_with("(use --force to replace it)"), "got {msg}");
    }

    #[test]
    fn not_found_names_the_requested_path() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("layouts/ops.toml"),
        };
        assert_eq!(err.to_string(), "dashctl config not found: layouts/ops.toml");
    }

    #[test]
    fn io_failures_keep_their_cause() {
        let read = ConfigError::ReadError {
            path: PathBuf::from("dashboard.toml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "mode 000"),
        };
        let write = ConfigError::WriteError {
            path: PathBuf::from("dashboard.toml"),
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        };
        assert_eq!(read.to_string(), "cannot read dashctl config dashboard.toml");
        assert_eq!(read.source().map(ToString::to_string).as_deref(), Some("mode 000"));
        assert_eq!(write.to_string(), "cannot write dashctl config dashboard.toml");
        assert_eq!(write.source().map(ToString::to_string).as_deref(), Some("disk full"));
    }
}
