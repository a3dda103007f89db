use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use wry::WebView;

use crate::events::WebViewEvent;

use super::{push_event, EventSink};

/// Handle to a managed WebView instance.
pub struct WebViewHandle {
    /// The underlying wry WebView.
    pub(super) webview: WebView,
    pub(super) events: EventSink,
    pub(super) next_request_id: Arc<AtomicU64>,
}

impl WebViewHandle {
    /// Navigate to a URL.
    pub fn load_url(&self, url: &str) -> Result<(), wry::Error> {
        self.webview.load_url(url)
    }

    /// Execute JavaScript; its JSON-encoded result is queued as a
    /// [`WebViewEvent::ScriptResult`] carrying the returned request id.
    pub fn evaluate_tracked(&self, js: &str) -> Result<u64, wry::Error> {
        let request_id = self.next_request_id.fetch_add(1, Ordering::Relaxed);
        let events = Arc::clone(&self.events);
        self.webview.evaluate_script_with_callback(js, move |result| {
            push_event(&events, WebViewEvent::ScriptResult { request_id, result });
        })?;
        Ok(request_id)
    }

    /// Set the WebView bounds (position + size) within its window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }
}
