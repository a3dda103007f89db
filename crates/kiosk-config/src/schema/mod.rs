//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod health;
mod logging;
mod overlay;
mod target;
mod window;

pub use health::*;
pub use logging::*;
pub use overlay::*;
pub use target::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for the kiosk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KioskConfig {
    pub target: TargetConfig,
    pub window: WindowConfig,
    pub overlay: OverlayConfig,
    pub health: HealthConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: KioskConfig = toml::from_str("").unwrap();
        assert_eq!(config.target.url, DEFAULT_TARGET_URL);
        assert!(config.window.fullscreen);
        assert_eq!(config.overlay.default_anchor, AnchorCorner::TopRight);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn sections_parse_independently() {
        let config: KioskConfig = toml::from_str(
            r#"
[overlay]
default_anchor = "center"

[health]
min_text_len = 12
"#,
        )
        .unwrap();
        assert_eq!(config.overlay.default_anchor, AnchorCorner::Center);
        assert_eq!(config.health.min_text_len, 12);
        // Untouched fields keep defaults
        assert_eq!(config.health.min_markup_len, 80);
        assert!(config.target.open_external_links);
    }
}
