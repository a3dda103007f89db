//! Blank-page detection thresholds.
//!
//! The defaults were tuned against the timeclock login page. Other target
//! pages may need different thresholds, hence they live here rather than
//! in code.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConfig {
    /// Run blank checks after each finished load.
    pub enabled: bool,
    /// Pages with fewer visible text characters than this may be blank.
    pub min_text_len: u32,
    /// Pages with less body markup than this may be blank.
    pub min_markup_len: u32,
    /// Delays after load completion at which the page is inspected.
    pub check_delays_ms: Vec<u64>,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_text_len: 5,
            min_markup_len: 80,
            check_delays_ms: vec![250, 1500],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_defaults() {
        let config = HealthConfig::default();
        assert!(config.enabled);
        assert_eq!(config.min_text_len, 5);
        assert_eq!(config.min_markup_len, 80);
        assert_eq!(config.check_delays_ms, vec![250, 1500]);
    }

    #[test]
    fn health_partial_toml() {
        let config: HealthConfig = toml::from_str("check_delays_ms = [500]").unwrap();
        assert_eq!(config.check_delays_ms, vec![500]);
        assert_eq!(config.min_text_len, 5);
    }
}
