//! Overlay anchor engine.
//!
//! The overlay lives at `main.origin + offset`, with the offset clamped per
//! axis to `[0, main_size - overlay_size]` so the control never leaves the
//! main surface. The offset is chosen from the configured corner the first
//! time the overlay is placed and persists afterwards; drags add to it.

use kiosk_common::{Offset, Rect, Size};
use kiosk_config::schema::{AnchorCorner, OverlayConfig};

// =============================================================================
// ENGINE
// =============================================================================

#[derive(Debug, Clone)]
pub struct AnchorEngine {
    overlay: Size,
    corner: AnchorCorner,
    margin: f64,
    /// `None` until the first placement.
    offset: Option<Offset>,
}

impl AnchorEngine {
    pub fn new(overlay: Size, corner: AnchorCorner, margin: f64) -> Self {
        Self {
            overlay,
            corner,
            margin,
            offset: None,
        }
    }

    pub fn from_config(config: &OverlayConfig) -> Self {
        Self::new(
            Size::new(config.width as f64, config.height as f64),
            config.default_anchor,
            config.margin as f64,
        )
    }

    /// Start from a known offset instead of the default corner.
    pub fn with_offset(mut self, offset: Offset) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn overlay_size(&self) -> Size {
        self.overlay
    }

    /// The stored offset, if the overlay has been placed at least once.
    pub fn offset(&self) -> Option<Offset> {
        self.offset
    }

    /// Compute the overlay's absolute bounds for the given main surface.
    ///
    /// Initializes the offset on first use. The clamped offset is written
    /// back so later drags start from where the overlay actually is.
    pub fn place(&mut self, main: Rect) -> Rect {
        let offset = self.offset.unwrap_or_else(|| {
            let initial = default_offset(main.size(), self.overlay, self.corner, self.margin);
            tracing::debug!(x = initial.x, y = initial.y, corner = ?self.corner, "anchor initialized");
            initial
        });
        let clamped = clamp_offset(offset, main.size(), self.overlay);
        self.offset = Some(clamped);
        overlay_bounds(main, clamped, self.overlay)
    }

    /// Apply a drag delta, then place.
    pub fn move_by(&mut self, dx: f64, dy: f64, main: Rect) -> Rect {
        let current = self.offset.unwrap_or_else(|| {
            default_offset(main.size(), self.overlay, self.corner, self.margin)
        });
        self.offset = Some(current.translated(dx, dy));
        self.place(main)
    }
}

// =============================================================================
// GEOMETRY
// =============================================================================

/// Offset for the configured starting corner.
pub fn default_offset(main: Size, overlay: Size, corner: AnchorCorner, margin: f64) -> Offset {
    match corner {
        AnchorCorner::TopRight => Offset::new(main.width - overlay.width - margin, margin),
        AnchorCorner::Center => Offset::new(
            (main.width - overlay.width) / 2.0,
            (main.height - overlay.height) / 2.0,
        ),
    }
}

/// Clamp each axis to `[0, main - overlay]`. When the overlay is larger
/// than the main surface on an axis, that axis resolves to 0.
pub fn clamp_offset(offset: Offset, main: Size, overlay: Size) -> Offset {
    Offset::new(
        clamp_axis(offset.x, main.width - overlay.width),
        clamp_axis(offset.y, main.height - overlay.height),
    )
}

fn clamp_axis(value: f64, max: f64) -> f64 {
    value.min(max).max(0.0)
}

/// Absolute overlay bounds for an already clamped offset.
pub fn overlay_bounds(main: Rect, offset: Offset, overlay: Size) -> Rect {
    Rect::new(
        main.x + offset.x,
        main.y + offset.y,
        overlay.width,
        overlay.height,
    )
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const OVERLAY: Size = Size {
        width: 132.0,
        height: 44.0,
    };

    fn engine(corner: AnchorCorner) -> AnchorEngine {
        AnchorEngine::new(OVERLAY, corner, 16.0)
    }

    fn screen() -> Rect {
        Rect::new(0.0, 0.0, 1920.0, 1080.0)
    }

    #[test]
    fn first_placement_uses_top_right_corner() {
        let mut e = engine(AnchorCorner::TopRight);
        assert!(e.offset().is_none());

        let bounds = e.place(screen());
        assert_eq!(bounds, Rect::new(1920.0 - 132.0 - 16.0, 16.0, 132.0, 44.0));
        assert_eq!(e.offset(), Some(Offset::new(1772.0, 16.0)));
    }

    #[test]
    fn first_placement_uses_center() {
        let mut e = engine(AnchorCorner::Center);
        let bounds = e.place(screen());
        assert_eq!(bounds.x, (1920.0 - 132.0) / 2.0);
        assert_eq!(bounds.y, (1080.0 - 44.0) / 2.0);
    }

    #[test]
    fn offset_persists_across_moves_of_main_surface() {
        let mut e = engine(AnchorCorner::TopRight);
        e.place(screen());
        let stored = e.offset();

        let moved = e.place(Rect::new(100.0, 200.0, 1920.0, 1080.0));
        assert_eq!(e.offset(), stored);
        assert_eq!(moved.x, 100.0 + 1772.0);
        assert_eq!(moved.y, 200.0 + 16.0);
    }

    #[test]
    fn bounds_are_main_origin_plus_clamped_offset() {
        let cases = [
            (Rect::new(0.0, 0.0, 800.0, 600.0), Offset::new(50.0, 60.0), (50.0, 60.0)),
            (Rect::new(10.0, 20.0, 800.0, 600.0), Offset::new(-30.0, -1.0), (10.0, 20.0)),
            (
                Rect::new(-1920.0, 0.0, 800.0, 600.0),
                Offset::new(5000.0, 5000.0),
                (-1920.0 + 800.0 - 132.0, 600.0 - 44.0),
            ),
            (Rect::new(0.0, 0.0, 800.0, 600.0), Offset::new(668.0, 556.0), (668.0, 556.0)),
        ];

        for (main, offset, (ex, ey)) in cases {
            let mut e = engine(AnchorCorner::TopRight).with_offset(offset);
            let bounds = e.place(main);
            assert_eq!(bounds, Rect::new(ex, ey, 132.0, 44.0), "main={main:?} offset={offset:?}");
        }
    }

    #[test]
    fn main_smaller_than_overlay_pins_to_origin() {
        let mut e = engine(AnchorCorner::TopRight).with_offset(Offset::new(40.0, 40.0));
        let bounds = e.place(Rect::new(5.0, 7.0, 100.0, 30.0));
        assert_eq!(bounds.x, 5.0);
        assert_eq!(bounds.y, 7.0);
    }

    #[test]
    fn move_by_twice_accumulates() {
        let mut e = engine(AnchorCorner::TopRight).with_offset(Offset::new(400.0, 300.0));
        e.move_by(10.0, -5.0, screen());
        e.move_by(10.0, -5.0, screen());
        assert_eq!(e.offset(), Some(Offset::new(420.0, 290.0)));
    }

    #[test]
    fn move_by_clamps_at_edges() {
        let mut e = engine(AnchorCorner::TopRight);
        e.place(screen());
        let bounds = e.move_by(500.0, -500.0, screen());
        assert_eq!(bounds.x, 1920.0 - 132.0);
        assert_eq!(bounds.y, 0.0);

        // Dragging back moves immediately; the overshoot was not banked.
        let bounds = e.move_by(-10.0, 10.0, screen());
        assert_eq!(bounds.x, 1920.0 - 132.0 - 10.0);
        assert_eq!(bounds.y, 10.0);
    }

    #[test]
    fn move_by_before_first_placement_starts_from_corner() {
        let mut e = engine(AnchorCorner::TopRight);
        let bounds = e.move_by(-100.0, 20.0, screen());
        assert_eq!(bounds.x, 1772.0 - 100.0);
        assert_eq!(bounds.y, 36.0);
    }

    #[test]
    fn shrinking_main_surface_pulls_overlay_inside() {
        let mut e = engine(AnchorCorner::TopRight);
        e.place(screen());
        let bounds = e.place(Rect::new(0.0, 0.0, 1024.0, 768.0));
        assert_eq!(bounds.x, 1024.0 - 132.0);
        assert_eq!(bounds.y, 16.0);
    }

    #[test]
    fn from_config_uses_configured_size() {
        let config = OverlayConfig {
            width: 200,
            height: 60,
            ..Default::default()
        };
        let e = AnchorEngine::from_config(&config);
        assert_eq!(e.overlay_size(), Size::new(200.0, 60.0));
    }
}
