//! Per-section validators.

use crate::schema::KioskConfig;

use super::helpers::validate_range;

/// Longest accepted blank-check delay.
const MAX_CHECK_DELAY_MS: u64 = 60_000;
/// Most blank checks scheduled per navigation.
const MAX_CHECKS: usize = 4;

pub(crate) fn validate_target(errors: &mut Vec<String>, config: &KioskConfig) {
    let url = config.target.url.trim();
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        errors.push(format!("target.url = {url:?} must be an http(s) URL"));
    }
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &KioskConfig) {
    validate_range(errors, "window.width", config.window.width, 320, 7680);
    validate_range(errors, "window.height", config.window.height, 240, 4320);
}

pub(crate) fn validate_overlay(errors: &mut Vec<String>, config: &KioskConfig) {
    validate_range(errors, "overlay.width", config.overlay.width, 16, 1024);
    validate_range(errors, "overlay.height", config.overlay.height, 16, 1024);
    validate_range(errors, "overlay.margin", config.overlay.margin, 0, 200);
}

pub(crate) fn validate_health(errors: &mut Vec<String>, config: &KioskConfig) {
    let health = &config.health;
    validate_range(errors, "health.min_text_len", health.min_text_len, 0, 10_000);
    validate_range(
        errors,
        "health.min_markup_len",
        health.min_markup_len,
        0,
        100_000,
    );

    let delays = &health.check_delays_ms;
    if health.enabled && (delays.is_empty() || delays.len() > MAX_CHECKS) {
        errors.push(format!(
            "health.check_delays_ms has {} entries, expected 1-{MAX_CHECKS}",
            delays.len()
        ));
    }
    for (i, delay) in delays.iter().enumerate() {
        validate_range(
            errors,
            &format!("health.check_delays_ms[{i}]"),
            *delay,
            0,
            MAX_CHECK_DELAY_MS,
        );
    }
}
