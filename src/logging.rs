//! Logging initialization for `dashctl`.
//!
//! Filter directives come from the `DASHCTL_LOG` environment variable. When
//! it is unset or invalid, the level from `[logging]` in the config applies.
//!
//! ```bash
//! DASHCTL_LOG=debug dashctl simulate add:CPU
//! DASHCTL_LOG=dashboard_layout::layout=trace,warn dashctl simulate row
//! ```

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogLevel;

/// Environment variable holding filter directives.
pub const LOG_ENV_VAR: &str = "DASHCTL_LOG";

/// Filter from `DASHCTL_LOG`, or `default` when unset or unparsable.
pub fn filter(default: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default.as_directive()))
}

/// Install the global tracing subscriber, writing to stderr.
///
/// Stdout stays reserved for command output.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init(default: LogLevel) {
    fmt()
        .with_env_filter(filter(default))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
