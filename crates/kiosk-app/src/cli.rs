use clap::Parser;

use kiosk_config::KioskConfig;

/// Timeclock kiosk: a locked-down full-screen shell around a web time clock.
#[derive(Parser, Debug, Default)]
#[command(name = "timeclock-kiosk", version, about)]
pub struct Args {
    /// Load this URL instead of the configured target.
    #[arg(long)]
    pub url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter directive override (e.g. `timeclock_kiosk=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Run in a normal window instead of fullscreen.
    #[arg(long)]
    pub windowed: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

impl Args {
    /// Apply command-line overrides on top of the loaded config.
    ///
    /// A `--url` that is not http(s) is ignored with a warning, leaving the
    /// configured target in place.
    pub fn apply_overrides(&self, config: &mut KioskConfig) {
        if let Some(url) = &self.url {
            if is_web_url(url) {
                config.target.url = url.clone();
            } else {
                tracing::warn!(url = %url, "ignoring --url: only http(s) URLs are accepted");
            }
        }
        if self.windowed {
            config.window.fullscreen = false;
        }
    }

    /// The log filter directive: `--log-level` wins over the config file.
    pub fn log_directive(&self, config: &KioskConfig) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config.logging.level.directive())
    }
}

fn is_web_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
