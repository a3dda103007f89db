mod app_state;
mod cli;

use std::path::Path;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use kiosk_common::ConfigError;
use kiosk_config::KioskConfig;

const FALLBACK_DIRECTIVE: &str = "timeclock_kiosk=info";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("timeclock-kiosk panicked: {info}");
        default_hook(info);
    }));
}

/// Load the config from `--config` or the platform default path. On error
/// the defaults are returned along with the error, which is logged once the
/// subscriber is up.
fn load_config(path: Option<&str>) -> (KioskConfig, Option<ConfigError>) {
    let result = match path {
        Some(p) => kiosk_config::toml_loader::load_from_path(Path::new(p)),
        None => kiosk_config::load_config(),
    };
    match result {
        Ok(config) => (config, None),
        Err(e) => (KioskConfig::default(), Some(e)),
    }
}

/// Split a comma-separated filter string into directives. A part that does
/// not parse is replaced by the fallback.
fn parse_directives(directive: &str) -> Vec<Directive> {
    directive
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<Directive>()
                .unwrap_or_else(|_| FALLBACK_DIRECTIVE.parse().unwrap())
        })
        .collect()
}

fn init_logging(directive: &str) {
    let filter = parse_directives(directive)
        .into_iter()
        .fold(EnvFilter::from_default_env(), EnvFilter::add_directive);
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    let (mut config, load_error) = load_config(args.config.as_deref());
    init_logging(&args.log_directive(&config));

    tracing::info!("timeclock-kiosk v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    args.apply_overrides(&mut config);
    tracing::debug!("Effective config:\n{}", kiosk_config::config_to_json(&config));
    tracing::info!(
        url = %config.target.url,
        fullscreen = config.window.fullscreen,
        "Config loaded"
    );

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::KioskApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_config::schema::LogLevel;

    #[test]
    fn every_config_level_yields_valid_directives() {
        for level in [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ] {
            let directive = level.directive();
            for part in directive.split(',') {
                assert!(
                    part.parse::<Directive>().is_ok(),
                    "{part:?} from {level:?} must parse"
                );
            }
            assert_eq!(parse_directives(&directive).len(), 2);
        }
    }

    #[test]
    fn directives_keep_their_targets() {
        let parsed: Vec<String> = parse_directives("timeclock_kiosk=debug,kiosk=debug")
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(parsed, ["timeclock_kiosk=debug", "kiosk=debug"]);
    }

    #[test]
    fn fallback_directive_parses() {
        assert!(FALLBACK_DIRECTIVE.parse::<Directive>().is_ok());
    }

    #[test]
    fn invalid_part_is_replaced_by_fallback() {
        let parsed = parse_directives("kiosk=debug,kiosk=loud,");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].to_string(), FALLBACK_DIRECTIVE);
    }

    #[test]
    fn filter_accepts_default_directives() {
        let filter = parse_directives(&LogLevel::Info.directive())
            .into_iter()
            .fold(EnvFilter::new(""), EnvFilter::add_directive);
        let rendered = filter.to_string();
        assert!(rendered.contains("timeclock_kiosk=info"));
        assert!(rendered.contains("kiosk=info"));
    }
}
