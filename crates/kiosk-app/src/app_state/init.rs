//! Window creation and webview setup.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, Window, WindowAttributes, WindowLevel};

use kiosk_common::{KioskError, Result};
use kiosk_config::schema::{OverlayConfig, OverlayInteraction, WindowConfig};
use kiosk_webview::SurfaceConfig;

use super::core::KioskApp;

// =============================================================================
// WINDOW ATTRIBUTES
// =============================================================================

fn main_window_attributes(config: &WindowConfig) -> WindowAttributes {
    let attrs = WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64));

    if config.fullscreen {
        attrs
            .with_decorations(false)
            .with_fullscreen(Some(Fullscreen::Borderless(None)))
    } else {
        attrs
    }
}

fn overlay_window_attributes(config: &OverlayConfig) -> WindowAttributes {
    let level = if config.always_on_top {
        WindowLevel::AlwaysOnTop
    } else {
        WindowLevel::Normal
    };
    WindowAttributes::default()
        .with_title("Reload")
        .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64))
        .with_decorations(false)
        .with_resizable(false)
        .with_transparent(true)
        .with_window_level(level)
        .with_active(config.interaction == OverlayInteraction::Focusable)
        .with_visible(false)
}

// =============================================================================
// INITIALIZATION
// =============================================================================

impl KioskApp {
    /// Create both windows and their webviews.
    pub(super) fn initialize_windows(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let main_window = create_window(event_loop, main_window_attributes(&self.config.window))?;
        let overlay_window =
            create_window(event_loop, overlay_window_attributes(&self.config.overlay))?;

        let main_config = SurfaceConfig {
            url: Some(self.reload_target.fallback().to_string()),
            devtools: self.config.window.devtools,
            user_agent: self.config.target.user_agent.clone(),
            open_external_links: self.config.target.open_external_links,
            ..Default::default()
        };
        let main_view = self
            .webviews
            .create_main(main_window.as_ref(), main_config)
            .map_err(|e| KioskError::WebView(format!("main surface: {e}")))?;

        let overlay_config = SurfaceConfig {
            transparent: true,
            devtools: self.config.window.devtools,
            ..Default::default()
        };
        let overlay_view = self
            .webviews
            .create_overlay(overlay_window.as_ref(), overlay_config)
            .map_err(|e| KioskError::WebView(format!("overlay surface: {e}")))?;

        tracing::info!(
            main = ?main_window.id(),
            overlay = ?overlay_window.id(),
            url = %self.reload_target.fallback(),
            "windows created"
        );

        self.main_view = Some(main_view);
        self.overlay_view = Some(overlay_view);
        self.main_window = Some(main_window);
        self.overlay_window = Some(overlay_window);
        self.sync_main_view_bounds();
        self.reposition_overlay();
        Ok(())
    }
}

fn create_window(event_loop: &ActiveEventLoop, attrs: WindowAttributes) -> Result<Arc<Window>> {
    event_loop
        .create_window(attrs)
        .map(Arc::new)
        .map_err(|e| KioskError::Window(e.to_string()))
}

// =============================================================================
// TESTS
// =============================================================================
