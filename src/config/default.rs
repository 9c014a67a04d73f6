//! Default configuration template and file creation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

/// Commented TOML template. Every value must match `Config::default()`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Dashboard layout configuration
#
# All values shown below are the built-in defaults.
# Location: $XDG_CONFIG_HOME/dashboard-layout/config.toml

# ==============================================================================
# Dashboard
# ==============================================================================

[dashboard]

# Title of new dashboards.
title = "New dashboard"

# Layout strategy used for new dashboards.
# Options: "responsive-grid", "rows-layout"
layout = "responsive-grid"

# Folder the dashboard is stored in. Leave unset for the root folder.
# folder = "general"

# ==============================================================================
# Responsive grid
# ==============================================================================

[grid]

# CSS grid-template-columns value for new grids.
# Presets: "1fr", "1fr 1fr", "1fr 1fr 1fr",
#          "repeat(auto-fit, minmax(<N>px, auto))"
# Any other string is accepted as is.
template_columns = "repeat(auto-fit, minmax(400px, auto))"

# CSS grid-auto-rows value for new grids.
# Presets: "minmax(<N>px, auto)", "<N>px"
auto_rows = "minmax(300px, auto)"

# ==============================================================================
# Logging
# ==============================================================================

[logging]

# Verbosity when DASHCTL_LOG is unset.
# Options: "error", "warn", "info", "debug", "trace"
level = "info"
"#;

/// Creates (or force-overwrites) the default config file.
///
/// - Existing file without `force`: `ConfigError::AlreadyExists`.
/// - Existing file with `force`: moved to `config.toml.backup` first.
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
