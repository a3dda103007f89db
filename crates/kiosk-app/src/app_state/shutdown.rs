//! Graceful shutdown: drop pending checks, destroy webviews, close windows.

use super::core::KioskApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl KioskApp {
    /// Perform graceful shutdown.
    ///
    /// Order matters:
    /// 1. Drop pending blank checks (no inspection may target a dying webview)
    /// 2. Destroy both webviews
    /// 3. Close both windows
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        // 1. Pending checks and in-flight inspections
        self.health.cancel_pending();
        self.inspections.clear();

        // 2. Webviews before the windows that host them
        self.overlay_view = None;
        self.main_view = None;
        let _ = self.webviews.drain_events();

        // 3. Windows
        self.overlay_window = None;
        self.main_window = None;
        self.overlay_shown = false;

        self.should_exit = true;
        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
