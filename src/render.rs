//! Pure render projections: item sets to screen-space draw boxes.
//!
//! This layer owns no state. Given read-only views of the item store, the
//! viewport, and the UI state, it produces [`ItemBox`] draw instructions in
//! ascending stacking order; the host positions one image element per box.
//!
//! Two independent projections exist and must not be confused:
//!
//! - [`project_live`] applies the current pan/zoom — the interactive editing
//!   view.
//! - [`project_fitted`] ignores pan/zoom entirely and scales the content
//!   bounds to fit a fixed target box — saved-outfit thumbnails, grid cards,
//!   and modal previews.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::geometry::{self, Point, Size};
use crate::input::UiState;
use crate::item::{ItemId, ItemStore};
use crate::viewport::Viewport;

/// One item's screen-space draw box.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBox {
    pub id: ItemId,
    pub image_url: String,
    /// Category label for alt text.
    pub category: String,
    /// Title for alt text.
    pub title: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees, independent of pan/zoom — passed through
    /// unchanged from the item.
    pub rotation: i32,
    pub z_index: i64,
    /// Whether to draw the selection highlight.
    pub selected: bool,
}

/// Project the item set through the live viewport, in ascending
/// `(z_index, id)` order.
#[must_use]
pub fn project_live(items: &ItemStore, viewport: &Viewport, ui: &UiState) -> Vec<ItemBox> {
    items
        .sorted_items()
        .into_iter()
        .map(|item| {
            let top_left = viewport.canvas_to_screen(Point::new(item.x, item.y));
            ItemBox {
                id: item.id.clone(),
                image_url: item.image_url.clone(),
                category: item.category.clone(),
                title: item.title.clone(),
                x: top_left.x,
                y: top_left.y,
                width: item.width * viewport.zoom,
                height: item.height * viewport.zoom,
                rotation: item.rotation,
                z_index: item.z_index,
                selected: ui.selected_id.as_deref() == Some(item.id.as_str()),
            }
        })
        .collect()
}

/// Project the item set bounds-fit and centered into a `target` box with
/// `padding` on every side, ignoring the live pan/zoom.
///
/// The empty set projects to nothing (the host renders its placeholder), and
/// degenerate bounds fall back through [`geometry::fit_scale`]'s zero-width
/// guard rather than dividing by zero. Selection is never highlighted in a
/// preview.
#[must_use]
pub fn project_fitted(items: &ItemStore, target: Size, padding: f64) -> Vec<ItemBox> {
    let Some(bounds) = geometry::content_bounds(items.iter()) else {
        return Vec::new();
    };
    let scale = geometry::fit_scale(&bounds, target.width, target.height, padding);
    let inner_w = (target.width - 2.0 * padding).max(0.0);
    let inner_h = (target.height - 2.0 * padding).max(0.0);
    let offset_x = padding + (inner_w - bounds.width() * scale) / 2.0;
    let offset_y = padding + (inner_h - bounds.height() * scale) / 2.0;

    items
        .sorted_items()
        .into_iter()
        .map(|item| ItemBox {
            id: item.id.clone(),
            image_url: item.image_url.clone(),
            category: item.category.clone(),
            title: item.title.clone(),
            x: (item.x - bounds.min_x) * scale + offset_x,
            y: (item.y - bounds.min_y) * scale + offset_y,
            width: item.width * scale,
            height: item.height * scale,
            rotation: item.rotation,
            z_index: item.z_index,
            selected: false,
        })
        .collect()
}
