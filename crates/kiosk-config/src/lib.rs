//! Kiosk configuration system.
//!
//! TOML-based configuration with validation. Every section uses serde
//! defaults so an empty or partial file still produces a working kiosk
//! pointed at the built-in timeclock URL.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use kiosk_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{KioskConfig, DEFAULT_TARGET_URL};

use kiosk_common::ConfigError;

/// Load config from the platform default path, creating a commented
/// default file on first run. An existing file is validated by the loader.
pub fn load_config() -> Result<KioskConfig, ConfigError> {
    toml_loader::load_default()
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &KioskConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
