//! Pure geometry: points, sizes, content bounds, and fit-scale math.
//!
//! Nothing in this module holds state. Items store their position and size in
//! canvas space (unscaled, unpanned); the conversions to screen space live on
//! [`crate::viewport::Viewport`], which owns the pan/zoom factors they depend
//! on.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::item::PlacedItem;

/// A point in either screen or canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Shrink to fit inside a `max × max` box, preserving aspect ratio.
    /// Never grows; degenerate inputs pass through unchanged.
    #[must_use]
    pub fn fit_within(self, max: f64) -> Self {
        let longest = self.width.max(self.height);
        if longest <= max || longest <= 0.0 {
            return self;
        }
        let scale = max / longest;
        Self { width: self.width * scale, height: self.height * scale }
    }
}

/// Axis-aligned bounding box over item corners, in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// The tight bounding box around every item's `(x, y)`–`(x+w, y+h)` corners.
///
/// Returns `None` for an empty set; callers must special-case (the fitted
/// preview renders nothing, for instance).
#[must_use]
pub fn content_bounds<'a, I>(items: I) -> Option<Bounds>
where
    I: IntoIterator<Item = &'a PlacedItem>,
{
    let mut bounds: Option<Bounds> = None;
    for item in items {
        let b = bounds.get_or_insert(Bounds {
            min_x: item.x,
            min_y: item.y,
            max_x: item.x + item.width,
            max_y: item.y + item.height,
        });
        b.min_x = b.min_x.min(item.x);
        b.min_y = b.min_y.min(item.y);
        b.max_x = b.max_x.max(item.x + item.width);
        b.max_y = b.max_y.max(item.y + item.height);
    }
    bounds
}

/// Largest scale at which `bounds`, padded by `padding` on every side, fits a
/// `target_w × target_h` box.
///
/// Computed as `min(inner_w / content_w, inner_h / content_h)` with
/// `inner = target − 2·padding`. A zero content dimension contributes a ratio
/// of 1 for that axis (the inner dimension substitutes for the content
/// dimension), so degenerate bounds never divide by zero. The result is
/// uncapped; call sites that must not upscale clamp with `.min(1.0)`.
#[must_use]
pub fn fit_scale(bounds: &Bounds, target_w: f64, target_h: f64, padding: f64) -> f64 {
    let inner_w = (target_w - 2.0 * padding).max(0.0);
    let inner_h = (target_h - 2.0 * padding).max(0.0);
    let content_w = if bounds.width() > 0.0 { bounds.width() } else { inner_w };
    let content_h = if bounds.height() > 0.0 { bounds.height() } else { inner_h };
    let sx = if content_w > 0.0 { inner_w / content_w } else { 1.0 };
    let sy = if content_h > 0.0 { inner_h / content_h } else { 1.0 };
    sx.min(sy)
}
