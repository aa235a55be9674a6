//! Shared numeric constants for the outfit canvas.

// ── Items ───────────────────────────────────────────────────────

/// Minimum width/height of a placed item, in canvas units.
pub const MIN_ITEM_DIM: f64 = 50.0;

/// Bounding box for the natural-size fit applied when a drop's image
/// dimensions resolve.
pub const NATURAL_FIT_MAX: f64 = 300.0;

/// Fallback square size when the image never reports its dimensions.
pub const DEFAULT_ITEM_SIZE: f64 = 200.0;

// ── Viewport ────────────────────────────────────────────────────

/// Zoom clamp range.
pub const ZOOM_MIN: f64 = 0.3;
pub const ZOOM_MAX: f64 = 3.0;

/// Multiplicative zoom step for the toolbar +/− buttons.
pub const ZOOM_BUTTON_STEP: f64 = 1.2;

/// Multiplicative zoom step per ctrl-wheel / pinch event.
pub const ZOOM_WHEEL_STEP: f64 = 1.05;

// ── Previews ────────────────────────────────────────────────────

/// Default inner padding for fitted preview projections, in pixels.
pub const PREVIEW_PADDING: f64 = 20.0;
