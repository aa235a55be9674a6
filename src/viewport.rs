//! Viewport state: pan offset, zoom factor, and coordinate conversions.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::consts::{ZOOM_MAX, ZOOM_MIN};
use crate::geometry::Point;

/// Pan/zoom state for the canvas.
///
/// `pan_x` / `pan_y` are in CSS pixels. `zoom` is a scale factor
/// (1.0 = no zoom), clamped to `[ZOOM_MIN, ZOOM_MAX]` by every mutation.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Viewport {
    /// Convert a screen-space point (CSS pixels) to canvas coordinates.
    #[must_use]
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a canvas-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        Point {
            x: canvas.x * self.zoom + self.pan_x,
            y: canvas.y * self.zoom + self.pan_y,
        }
    }

    /// Convert a screen-space distance (pixels) to canvas-space distance.
    #[must_use]
    pub fn screen_dist_to_canvas(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Apply a multiplicative zoom step about a focal screen point.
    ///
    /// The canvas point under `focus` stays fixed on screen: the anchor is
    /// captured with the old state, the new zoom is clamped, and the pan is
    /// recomputed so `canvas_to_screen(anchor) == focus` again. Zooming about
    /// the origin instead would make the content fly under the cursor.
    pub fn zoom_by(&mut self, factor: f64, focus: Point) {
        let anchor = self.screen_to_canvas(focus);
        self.zoom = (self.zoom * factor).clamp(ZOOM_MIN, ZOOM_MAX);
        self.pan_x = focus.x - anchor.x * self.zoom;
        self.pan_y = focus.y - anchor.y * self.zoom;
    }

    /// Reset to the identity view. Only ever called explicitly.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
