//! Overlay placement glue: main window geometry in, overlay position out.

use winit::dpi::{LogicalPosition, PhysicalPosition, PhysicalSize};
use winit::window::Window;

use kiosk_common::Rect;

use super::core::KioskApp;

// =============================================================================
// COORDINATE CONVERSION
// =============================================================================

/// Main window client area in logical (DPI-independent) coordinates.
fn logical_bounds(position: PhysicalPosition<i32>, size: PhysicalSize<u32>, scale: f64) -> Rect {
    let pos = position.to_logical::<f64>(scale);
    let size = size.to_logical::<f64>(scale);
    Rect::new(pos.x, pos.y, size.width, size.height)
}

fn window_bounds(window: &Window) -> Rect {
    // Wayland does not expose window positions; treat the origin as (0, 0).
    let position = window.inner_position().unwrap_or_default();
    logical_bounds(position, window.inner_size(), window.scale_factor())
}

/// A webview rect covering a whole window of the given logical size.
pub(super) fn fill_rect(width: f64, height: f64) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(width, height)),
    }
}

// =============================================================================
// PLACEMENT
// =============================================================================

impl KioskApp {
    fn main_bounds(&self) -> Option<Rect> {
        self.main_window.as_deref().map(window_bounds)
    }

    /// Recompute the overlay position from the current main bounds.
    pub(super) fn reposition_overlay(&mut self) {
        let Some(main) = self.main_bounds() else {
            return;
        };
        let bounds = self.anchor.place(main);
        self.apply_overlay_bounds(bounds);
    }

    /// Shift the overlay by a drag delta, clamped to the main window.
    pub(super) fn move_overlay_by(&mut self, dx: f64, dy: f64) {
        let Some(main) = self.main_bounds() else {
            return;
        };
        let bounds = self.anchor.move_by(dx, dy, main);
        tracing::debug!(dx, dy, x = bounds.x, y = bounds.y, "overlay moved");
        self.apply_overlay_bounds(bounds);
    }

    fn apply_overlay_bounds(&self, bounds: Rect) {
        if let Some(ref w) = self.overlay_window {
            w.set_outer_position(LogicalPosition::new(bounds.x, bounds.y));
        }
        if let Some(ref view) = self.overlay_view {
            if let Err(e) = view.set_bounds(fill_rect(bounds.width, bounds.height)) {
                tracing::warn!("Failed to size overlay webview: {e}");
            }
        }
    }

    /// Keep the main webview covering the whole main window.
    pub(super) fn sync_main_view_bounds(&self) {
        let (Some(window), Some(view)) = (&self.main_window, &self.main_view) else {
            return;
        };
        let size = window.inner_size().to_logical::<f64>(window.scale_factor());
        if let Err(e) = view.set_bounds(fill_rect(size.width, size.height)) {
            tracing::warn!("Failed to size main webview: {e}");
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
