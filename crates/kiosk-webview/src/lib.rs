//! WebView surfaces for the kiosk.
//!
//! Wraps the `wry` crate to provide:
//! - The main surface: the remote page, with no host channel at all
//! - The overlay surface: a bundled reload control with a two-call bridge
//! - Link policy: in-place navigation vs. OS browser hand-off
//! - An event queue drained by the window event loop

pub mod bridge;
pub mod events;
pub mod manager;
pub mod overlay_page;
pub mod policy;

pub use bridge::{BridgeRequest, MOVE_BY_CHANNEL, RELOAD_CHANNEL};
pub use events::{PageLoadState, SurfaceId, WebViewEvent};
pub use manager::{SurfaceConfig, WebViewHandle, WebViewManager};
pub use policy::{LinkDecision, MainNavigationPolicy};
