use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the kiosk crates at this level.
    pub fn directive(self) -> String {
        let level = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        format!("timeclock_kiosk={level},kiosk={level}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parses_uppercase() {
        let config: LoggingConfig = toml::from_str(r#"level = "DEBUG""#).unwrap();
        assert_eq!(config.level, LogLevel::Debug);
    }

    #[test]
    fn directive_covers_both_targets() {
        assert_eq!(
            LogLevel::Warn.directive(),
            "timeclock_kiosk=warn,kiosk=warn"
        );
    }
}
