//! Core TOML config loading: read from path or platform default.

use crate::schema::KioskConfig;
use crate::validation;
use kiosk_common::ConfigError;
use std::path::Path;
use tracing::info;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. The parsed config is validated and
/// validation failures are returned to the caller, which decides whether
/// to fall back to defaults.
pub fn load_from_path(path: &Path) -> Result<KioskConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: KioskConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    validation::validate(&config)?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Windows: `%APPDATA%\timeclock-kiosk\config.toml`
/// On Linux: `~/.config/timeclock-kiosk/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<KioskConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(KioskConfig::default());
    }

    load_from_path(&path)
}
