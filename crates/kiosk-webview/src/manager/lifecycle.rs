use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::bridge::BRIDGE_INIT_SCRIPT;
use crate::events::SurfaceId;
use crate::overlay_page::OVERLAY_HTML;
use crate::policy::MainNavigationPolicy;

use super::handle::WebViewHandle;
use super::types::SurfaceConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create the main surface filling `window`.
    ///
    /// The remote page gets no initialization script and no IPC handler:
    /// nothing it runs can reach the host.
    pub fn create_main<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        config: SurfaceConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_focused(true);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), SurfaceId::Main);
        builder = Self::attach_main_navigation_handlers(
            builder,
            Arc::clone(&events),
            MainNavigationPolicy {
                open_external_links: config.open_external_links,
            },
        );

        let initial_url = config.url.clone().unwrap_or_else(|| "about:blank".to_string());
        builder = builder.with_url(&initial_url);

        let webview = builder.build(window)?;
        debug!(url = %initial_url, "main WebView created");

        Ok(self.handle(webview))
    }

    /// Create the overlay surface filling `window`, with the bridge installed.
    pub fn create_overlay<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        config: SurfaceConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_focused(false)
            .with_initialization_script(BRIDGE_INIT_SCRIPT);

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), SurfaceId::Overlay);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), SurfaceId::Overlay);
        builder = Self::attach_overlay_navigation_handlers(builder, Arc::clone(&events));

        builder = builder.with_html(OVERLAY_HTML);

        let webview = builder.build(window)?;
        debug!("overlay WebView created");

        Ok(self.handle(webview))
    }

    fn handle(&self, webview: wry::WebView) -> WebViewHandle {
        WebViewHandle {
            webview,
            events: Arc::clone(&self.events),
            next_request_id: Arc::clone(&self.next_request_id),
        }
    }
}
