use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, SurfaceId, WebViewEvent};
use crate::policy::{is_overlay_navigation_allowed, MainNavigationPolicy};

use super::{push_event, EventSink, WebViewManager};

/// Reject bodies that are not JSON objects before they reach the queue.
pub(crate) fn is_well_formed_ipc_body(body: &str) -> bool {
    matches!(
        serde_json::from_str::<serde_json::Value>(body),
        Ok(serde_json::Value::Object(_))
    )
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    /// Bridge handler. Only ever attached to the overlay surface.
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        surface: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if !is_well_formed_ipc_body(&body) {
                warn!(
                    ?surface,
                    body_len = body.len(),
                    "bridge message rejected: not a JSON object"
                );
                return;
            }

            debug!(?surface, body_len = body.len(), "bridge message");
            push_event(&events, WebViewEvent::IpcMessage { surface, body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        surface: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?surface, ?state, url = %url, "page load");
            push_event(
                &events,
                WebViewEvent::PageLoad {
                    surface,
                    state,
                    url,
                },
            );
        })
    }

    /// Main surface: web links stay in place, other schemes go to the OS,
    /// new windows never open in-app.
    pub(super) fn attach_main_navigation_handlers<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        policy: MainNavigationPolicy,
    ) -> WebViewBuilder<'a> {
        let nav_events = events.clone();
        builder
            .with_navigation_handler(move |url| {
                let allowed = policy.on_navigation(&url);
                if !allowed {
                    push_event(
                        &nav_events,
                        WebViewEvent::NavigationBlocked {
                            surface: SurfaceId::Main,
                            url,
                        },
                    );
                }
                allowed
            })
            .with_new_window_req_handler(move |url| {
                let allowed = policy.on_new_window(&url);
                push_event(
                    &events,
                    WebViewEvent::NavigationBlocked {
                        surface: SurfaceId::Main,
                        url,
                    },
                );
                allowed
            })
    }

    /// Overlay surface: pinned to its bundled document.
    pub(super) fn attach_overlay_navigation_handlers<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
    ) -> WebViewBuilder<'a> {
        let nav_events = events.clone();
        builder
            .with_navigation_handler(move |url| {
                if is_overlay_navigation_allowed(&url) {
                    return true;
                }
                warn!(url = %url, "overlay navigation blocked");
                push_event(
                    &nav_events,
                    WebViewEvent::NavigationBlocked {
                        surface: SurfaceId::Overlay,
                        url,
                    },
                );
                false
            })
            .with_new_window_req_handler(move |url| {
                warn!(url = %url, "overlay new window blocked");
                push_event(
                    &events,
                    WebViewEvent::NavigationBlocked {
                        surface: SurfaceId::Overlay,
                        url,
                    },
                );
                false
            })
    }
}

// =============================================================================
// TESTS
// =============================================================================
