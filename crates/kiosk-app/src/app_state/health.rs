//! Glue between main-surface load events and the health monitor.

use std::time::Instant;

use kiosk_overlay::health::{is_error_document, INSPECT_SCRIPT};
use kiosk_webview::PageLoadState;

use super::core::KioskApp;

impl KioskApp {
    pub(super) fn on_main_page_load(&mut self, state: PageLoadState, url: &str) {
        match state {
            PageLoadState::Started => {
                self.inspections.clear();
                self.health.on_load_started(url);
            }
            PageLoadState::Finished => {
                if is_error_document(url) {
                    self.health.on_load_failed(url, "browser error document");
                    return;
                }
                self.reload_target.record_success(url);
                self.health.on_load_finished(url, Instant::now());
            }
        }
    }

    /// Start an inspection for every check whose deadline has passed.
    pub(super) fn run_due_checks(&mut self, now: Instant) {
        for ticket in self.health.take_due(now) {
            let evaluated = match self.main_view {
                Some(ref view) => view.evaluate_tracked(INSPECT_SCRIPT).map_err(|e| e.to_string()),
                None => Err("main webview not available".to_string()),
            };
            match evaluated {
                Ok(request_id) => {
                    self.inspections.insert(request_id, ticket);
                }
                Err(e) => {
                    tracing::warn!(check = ticket.index, error = %e, "inspection could not run");
                    self.health.on_inspection(ticket, None);
                }
            }
        }
    }

    pub(super) fn on_script_result(&mut self, request_id: u64, result: &str) {
        match self.inspections.remove(&request_id) {
            Some(ticket) => {
                self.health.on_inspection(ticket, Some(result));
            }
            None => {
                tracing::debug!(request_id, "untracked script result dropped");
            }
        }
    }

    /// Show or hide the overlay window to match the monitor.
    pub(super) fn sync_overlay_visibility(&mut self) {
        let wanted = self.health.overlay_visible();
        if wanted == self.overlay_shown {
            return;
        }
        self.overlay_shown = wanted;
        if wanted {
            self.reposition_overlay();
        }
        if let Some(ref w) = self.overlay_window {
            w.set_visible(wanted);
        }
        tracing::info!(visible = wanted, state = ?self.health.state(), "overlay visibility");
    }
}

// =============================================================================
// TESTS
// =============================================================================
