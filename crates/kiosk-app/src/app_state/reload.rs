//! Manual reload of the main surface.

use super::core::KioskApp;

impl KioskApp {
    /// Re-navigate the main surface to the last good URL, or the start URL
    /// if nothing has loaded yet. A failed navigation shows the overlay.
    pub(super) fn reload(&mut self, source: &str) {
        let target = self.reload_target.target().to_string();
        let Some(ref view) = self.main_view else {
            tracing::warn!(source, "reload requested before the main webview exists");
            return;
        };

        tracing::info!(source, url = %target, "reloading main surface");
        if let Err(e) = view.load_url(&target) {
            self.health.on_load_failed(&target, &e.to_string());
        }
    }
}
