//! WebView lifecycle management.
//!
//! `WebViewManager` builds the two `wry::WebView` instances the kiosk uses
//! and owns the queue their callbacks push into. `wry` invokes callbacks on
//! the UI thread while the event loop is dispatching; the loop drains the
//! queue afterwards.

use std::sync::atomic::AtomicU64;
use std::sync::{Arc, Mutex};

use crate::events::WebViewEvent;

mod handle;
mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::SurfaceConfig;

/// Shared event sink handed to every webview callback.
pub(crate) type EventSink = Arc<Mutex<Vec<WebViewEvent>>>;

pub struct WebViewManager {
    /// Callbacks push here; the event loop drains.
    pub(crate) events: EventSink,
    /// Source of ids for tracked script evaluations.
    pub(crate) next_request_id: Arc<AtomicU64>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            next_request_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Push an event, tolerating a poisoned lock.
pub(crate) fn push_event(sink: &EventSink, event: WebViewEvent) {
    match sink.lock() {
        Ok(mut events) => events.push(event),
        Err(poisoned) => poisoned.into_inner().push(event),
    }
}
