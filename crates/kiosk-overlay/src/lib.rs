//! Window-independent logic behind the reload overlay.
//!
//! - [`anchor`] keeps the overlay glued inside the main surface.
//! - [`health`] decides when a finished load actually rendered nothing.
//! - [`navigation`] remembers where a reload should go.
//!
//! Nothing here touches a window or a webview, so every rule is unit-tested
//! without a display.

pub mod anchor;
pub mod health;
pub mod navigation;

pub use anchor::AnchorEngine;
pub use health::{HealthMonitor, LoadState, PageReport};
pub use navigation::ReloadTarget;
