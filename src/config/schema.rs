//! TOML configuration schema types for dashboard-layout.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so any subset of the file may be given.

use serde::{Deserialize, Serialize};

use crate::layout::grid::{DEFAULT_AUTO_ROWS, DEFAULT_TEMPLATE_COLUMNS};
use crate::layout::GridTemplate;

/// Root configuration encompassing all sections.
///
/// ```toml
/// [dashboard]
/// [grid]
/// [logging]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Dashboard identity and initial layout.
    pub dashboard: DashboardConfig,
    /// Initial responsive grid sizing.
    pub grid: GridConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

/// Dashboard-level settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Dashboard title.
    pub title: String,
    /// Strategy id of the initial layout (`responsive-grid`, `rows-layout`).
    pub layout: String,
    /// Folder the dashboard belongs to, if any.
    pub folder: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "New dashboard".to_string(),
            layout: "responsive-grid".to_string(),
            folder: None,
        }
    }
}

/// Sizing tokens for a freshly created grid.
///
/// Converted grids always start from the built-in defaults.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    /// CSS `grid-template-columns` value.
    pub template_columns: String,
    /// CSS `grid-auto-rows` value.
    pub auto_rows: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            template_columns: DEFAULT_TEMPLATE_COLUMNS.to_string(),
            auto_rows: DEFAULT_AUTO_ROWS.to_string(),
        }
    }
}

impl From<&GridConfig> for GridTemplate {
    fn from(config: &GridConfig) -> Self {
        GridTemplate::new(config.template_columns.clone(), config.auto_rows.clone())
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default verbosity, overridden by `DASHCTL_LOG`.
    pub level: LogLevel,
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    #[default]
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
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
