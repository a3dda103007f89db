//! Event-queue draining and wake-up scheduling.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use kiosk_webview::{SurfaceId, WebViewEvent};

use super::core::KioskApp;
use super::types::{next_wake, POLL_INTERVAL};

impl KioskApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
        }

        self.run_due_checks(Instant::now());
        self.sync_overlay_visibility();

        event_loop.set_control_flow(ControlFlow::WaitUntil(next_wake(
            Instant::now(),
            self.health.next_deadline(),
        )));
    }

    /// Drain and dispatch everything the webview callbacks queued.
    fn poll_webview_events(&mut self) {
        for event in self.webviews.drain_events() {
            match event {
                WebViewEvent::PageLoad {
                    surface: SurfaceId::Main,
                    state,
                    url,
                } => self.on_main_page_load(state, &url),
                WebViewEvent::PageLoad {
                    surface: SurfaceId::Overlay,
                    state,
                    ..
                } => {
                    tracing::debug!(?state, "overlay page load");
                }
                WebViewEvent::IpcMessage {
                    surface: SurfaceId::Overlay,
                    body,
                } => self.handle_bridge_message(&body),
                WebViewEvent::IpcMessage { surface, body } => {
                    tracing::warn!(?surface, body_len = body.len(), "unexpected IPC message dropped");
                }
                WebViewEvent::ScriptResult { request_id, result } => {
                    self.on_script_result(request_id, &result);
                }
                WebViewEvent::NavigationBlocked { surface, url } => {
                    tracing::debug!(?surface, url = %url, "navigation kept out of the webview");
                }
            }
        }
    }
}
