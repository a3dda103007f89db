//! Dispatch of validated overlay bridge requests.

use kiosk_config::schema::OverlayInteraction;
use kiosk_webview::BridgeRequest;

use super::core::KioskApp;

impl KioskApp {
    /// Handle a single message posted by the overlay page.
    pub(super) fn handle_bridge_message(&mut self, body: &str) {
        let request = match BridgeRequest::parse(body) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(body_len = body.len(), error = %e, "bridge message rejected");
                return;
            }
        };

        tracing::debug!(kind = %request.kind(), "bridge request dispatched");

        match request {
            BridgeRequest::Reload => self.reload("overlay"),
            BridgeRequest::MoveBy { dx, dy } => self.move_overlay_by(dx, dy),
        }

        if self.config.overlay.interaction == OverlayInteraction::NonFocusable {
            self.refocus_main();
        }
    }

    /// Hand keyboard focus back to the main surface.
    fn refocus_main(&self) {
        if let Some(ref w) = self.main_window {
            if !w.has_focus() {
                w.focus_window();
            }
        }
        if let Some(ref view) = self.main_view {
            if let Err(e) = view.focus() {
                tracing::debug!("Failed to focus main webview: {e}");
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
