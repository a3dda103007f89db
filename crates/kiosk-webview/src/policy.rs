//! Link and navigation policy.
//!
//! The main surface follows web links in place so the login flow can cross
//! origins, but anything that would leave the browser (mail, phone, app
//! schemes) or open a second window goes to the OS instead. The overlay
//! never navigates away from its bundled page.

use tracing::{info, warn};

/// What to do with a navigation request on the main surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkDecision {
    /// Let the webview navigate.
    InPlace,
    /// Cancel in-app and hand the URL to the OS default handler.
    External,
    /// Cancel and drop.
    Block,
}

/// Schemes the webview handles itself (frames, object URLs, blank pages).
const IN_PLACE_SCHEMES: &[&str] = &["https://", "http://", "about:", "blob:"];

/// Schemes that are never followed or handed off.
const BLOCKED_SCHEMES: &[&str] = &["javascript:", "file:", "data:", "vbscript:"];

/// Decide how the main surface handles a navigation to `url`.
pub fn main_navigation_decision(url: &str) -> LinkDecision {
    let lower = url.trim().to_ascii_lowercase();
    if IN_PLACE_SCHEMES.iter().any(|s| lower.starts_with(s)) {
        LinkDecision::InPlace
    } else if lower.is_empty() || BLOCKED_SCHEMES.iter().any(|s| lower.starts_with(s)) {
        LinkDecision::Block
    } else if lower.contains(':') {
        LinkDecision::External
    } else {
        LinkDecision::Block
    }
}

/// Decide how a new-window request (`target=_blank`, `window.open`) is
/// handled. It never opens in-app.
pub fn new_window_decision(url: &str, open_external_links: bool) -> LinkDecision {
    match main_navigation_decision(url) {
        LinkDecision::Block => LinkDecision::Block,
        _ if open_external_links => LinkDecision::External,
        _ => LinkDecision::Block,
    }
}

/// URLs the overlay may load: only its own inline document.
const OVERLAY_ALLOWED_PREFIXES: &[&str] = &["about:blank", "data:text/html"];

pub fn is_overlay_navigation_allowed(url: &str) -> bool {
    OVERLAY_ALLOWED_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

/// Main-surface policy as wired into the webview handlers.
#[derive(Debug, Clone, Copy)]
pub struct MainNavigationPolicy {
    pub open_external_links: bool,
}

impl MainNavigationPolicy {
    /// Navigation handler body. Returns whether the webview may proceed.
    pub fn on_navigation(&self, url: &str) -> bool {
        match main_navigation_decision(url) {
            LinkDecision::InPlace => true,
            LinkDecision::External => {
                open_external(url);
                false
            }
            LinkDecision::Block => {
                warn!(url = %url, "navigation blocked");
                false
            }
        }
    }

    /// New-window handler body. Always returns false (no in-app window).
    pub fn on_new_window(&self, url: &str) -> bool {
        match new_window_decision(url, self.open_external_links) {
            LinkDecision::External => open_external(url),
            _ => warn!(url = %url, "new window request canceled"),
        }
        false
    }
}

/// Hand a URL to the OS default handler. Failures are logged, not raised:
/// the kiosk keeps running either way.
pub fn open_external(url: &str) {
    match open::that(url) {
        Ok(()) => info!(url = %url, "opened in default browser"),
        Err(e) => warn!(url = %url, error = %e, "failed to open external link"),
    }
}
