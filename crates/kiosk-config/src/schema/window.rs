//! Main surface configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Start in borderless fullscreen.
    pub fullscreen: bool,
    /// Windowed size in logical pixels (used when `fullscreen` is off).
    pub width: u32,
    pub height: u32,
    /// Let `Escape` leave fullscreen. Off for unattended kiosks.
    pub allow_escape: bool,
    /// Enable webview dev tools (always on in debug builds).
    pub devtools: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Timeclock".into(),
            fullscreen: true,
            width: 1280,
            height: 800,
            allow_escape: false,
            devtools: cfg!(debug_assertions),
        }
    }
}
