//! Overlay (reload control) window configuration.

use serde::{Deserialize, Serialize};

/// Where the overlay sits the first time it is placed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorCorner {
    #[default]
    TopRight,
    Center,
}

/// Focus behavior of the overlay window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayInteraction {
    /// Created inactive; focus returns to the main surface after each click.
    #[default]
    NonFocusable,
    /// Takes focus like a normal window when clicked.
    Focusable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Overlay size in logical pixels (valid range: 16-1024).
    pub width: u32,
    pub height: u32,
    /// Distance from the main surface edges for the `top-right` corner.
    pub margin: u32,
    pub default_anchor: AnchorCorner,
    pub interaction: OverlayInteraction,
    pub always_on_top: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            width: 132,
            height: 44,
            margin: 16,
            default_anchor: AnchorCorner::TopRight,
            interaction: OverlayInteraction::NonFocusable,
            always_on_top: true,
        }
    }
}
