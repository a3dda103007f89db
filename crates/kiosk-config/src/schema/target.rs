//! The remote page the kiosk wraps.

use serde::{Deserialize, Serialize};

/// Timeclock login page loaded at startup and used as the reload fallback.
pub const DEFAULT_TARGET_URL: &str = "https://webtime2.paylocity.com/WebTime/Login/WebClock";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Start URL. Must be `http` or `https`.
    pub url: String,
    /// Hand `target=_blank` / `window.open` requests to the OS browser.
    /// When false they are only canceled.
    pub open_external_links: bool,
    /// Custom user agent for the main surface.
    pub user_agent: Option<String>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_TARGET_URL.into(),
            open_external_links: true,
            user_agent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_defaults() {
        let config = TargetConfig::default();
        assert_eq!(config.url, DEFAULT_TARGET_URL);
        assert!(config.open_external_links);
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn target_partial_toml() {
        let config: TargetConfig = toml::from_str(r#"url = "https://example.com/clock""#).unwrap();
        assert_eq!(config.url, "https://example.com/clock");
        assert!(config.open_external_links);
    }
}
