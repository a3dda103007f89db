//! WebView event types.

use serde::{Deserialize, Serialize};

/// Which of the two surfaces an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceId {
    Main,
    Overlay,
}

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by the webviews, queued for the main event loop.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        surface: SurfaceId,
        state: PageLoadState,
        url: String,
    },
    /// A message was posted through the overlay bridge.
    IpcMessage { surface: SurfaceId, body: String },
    /// Result of a script evaluated with [`crate::WebViewHandle::evaluate_tracked`].
    ScriptResult { request_id: u64, result: String },
    /// A navigation or new-window request was refused in-app.
    NavigationBlocked { surface: SurfaceId, url: String },
}
