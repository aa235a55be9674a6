//! `wasm-bindgen` boundary: the imperative control surface handed to the
//! hosting page.
//!
//! [`OutfitCanvas`] wraps an [`EngineCore`] plus the wardrobe catalog needed
//! to re-hydrate saved outfits. Everything crossing the boundary is a JSON
//! string or a primitive: event handlers return the serialized action list
//! (`renderNeeded` / `setCursor`), queries return the serialized item set or
//! projection. The day-by-day trip planner uses `get_items` / `clear` /
//! `load_items` to swap one canvas between days without remounting it.
//!
//! This is the only module that logs: malformed drop payloads, undecodable
//! record lists, and skipped imports go to the browser console (stderr off
//! wasm). None of them interrupt the user — the worst case is a no-op or a
//! partially loaded outfit.

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::consts::PREVIEW_PADDING;
use crate::engine::{Action, DropToken, EngineCore};
use crate::geometry::{Point, Size};
use crate::input::{Button, Key, Modifiers, WheelDelta};
use crate::item::{CatalogItem, ItemId};
use crate::outfit::{self, OutfitItemRecord, OutfitSave};
use crate::render;

/// Log a warning to the browser console (stderr when compiled natively).
fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{message}");
}

fn to_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(err) => {
            warn(&format!("outfit-canvas: serialization failed: {err}"));
            String::from("[]")
        }
    }
}

fn button_from_web(button: i16) -> Button {
    match button {
        1 => Button::Middle,
        2 => Button::Secondary,
        _ => Button::Primary,
    }
}

/// The canvas engine as exposed to the hosting page.
#[wasm_bindgen]
pub struct OutfitCanvas {
    core: EngineCore,
    catalog: HashMap<ItemId, CatalogItem>,
}

#[wasm_bindgen]
impl OutfitCanvas {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> OutfitCanvas {
        OutfitCanvas { core: EngineCore::new(), catalog: HashMap::new() }
    }

    /// Supply the wardrobe catalog (JSON array of catalog items) used to
    /// resolve saved-outfit records back to images.
    pub fn set_catalog(&mut self, catalog_json: &str) {
        match serde_json::from_str::<Vec<CatalogItem>>(catalog_json) {
            Ok(entries) => {
                self.catalog = entries.into_iter().map(|e| (e.id.clone(), e)).collect();
            }
            Err(err) => warn(&format!("outfit-canvas: bad catalog payload: {err}")),
        }
    }

    /// Update the canvas element's CSS-pixel dimensions.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64) {
        self.core.set_viewport(width_css, height_css);
    }

    // --- Drop pipeline ---

    /// Start a drop from the wardrobe panel's drag payload. Returns the probe
    /// token to pass back once the image has been measured, or `None` for a
    /// malformed payload (logged, dropped).
    pub fn begin_drop(&mut self, payload_json: &str, x: f64, y: f64) -> Option<String> {
        match self.core.begin_drop(payload_json, Point::new(x, y)) {
            Ok(token) => Some(token.as_uuid().to_string()),
            Err(err) => {
                warn(&format!("outfit-canvas: ignoring malformed drop payload: {err}"));
                None
            }
        }
    }

    /// Complete a drop with the image's measured natural dimensions.
    pub fn resolve_drop(&mut self, token: &str, natural_width: f64, natural_height: f64) -> String {
        let Some(token) = parse_token(token) else {
            return String::from("[]");
        };
        to_json(&self.core.resolve_drop(token, Some(Size::new(natural_width, natural_height))))
    }

    /// Complete a drop whose dimension probe failed; the default size is used.
    pub fn fail_drop(&mut self, token: &str) -> String {
        let Some(token) = parse_token(token) else {
            return String::from("[]");
        };
        to_json(&self.core.resolve_drop(token, None))
    }

    // --- Input events ---

    pub fn on_item_pointer_down(&mut self, id: &str, x: f64, y: f64) -> String {
        to_json(&self.core.on_item_pointer_down(id, Point::new(x, y)))
    }

    pub fn on_canvas_pointer_down(&mut self, x: f64, y: f64, button: i16) -> String {
        to_json(&self.core.on_canvas_pointer_down(Point::new(x, y), button_from_web(button)))
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> String {
        to_json(&self.core.on_pointer_move(Point::new(x, y)))
    }

    pub fn on_pointer_up(&mut self) -> String {
        to_json(&self.core.on_pointer_up())
    }

    pub fn on_pointer_leave(&mut self) -> String {
        to_json(&self.core.on_pointer_leave())
    }

    pub fn on_wheel(&mut self, x: f64, y: f64, dx: f64, dy: f64, ctrl: bool) -> String {
        let modifiers = Modifiers { ctrl, ..Modifiers::default() };
        to_json(&self.core.on_wheel(Point::new(x, y), WheelDelta { dx, dy }, modifiers))
    }

    pub fn on_key_down(&mut self, key: &str) -> String {
        to_json(&self.core.on_key_down(&Key(key.to_string())))
    }

    // --- Toolbar operations ---

    pub fn delete_selected(&mut self) -> String {
        to_json(&self.core.delete_selected())
    }

    pub fn rotate_selected(&mut self) -> String {
        to_json(&self.core.rotate_selected())
    }

    pub fn resize_selected(&mut self, delta: f64) -> String {
        to_json(&self.core.resize_selected(delta))
    }

    pub fn reset_selected_size(&mut self) -> String {
        to_json(&self.core.reset_selected_size())
    }

    pub fn zoom_in(&mut self) -> String {
        to_json(&self.core.zoom_in())
    }

    pub fn zoom_out(&mut self) -> String {
        to_json(&self.core.zoom_out())
    }

    /// Reset pan and zoom to the identity view.
    pub fn reset_view(&mut self) -> String {
        self.core.viewport.reset();
        to_json(&vec![Action::RenderNeeded])
    }

    pub fn clear(&mut self) -> String {
        to_json(&self.core.clear())
    }

    // --- Persistence surface ---

    /// The current item set as a JSON array, order-insensitive.
    #[must_use]
    pub fn get_items(&self) -> String {
        to_json(&self.core.get_items())
    }

    /// Restore a saved outfit from its persisted record list. Records whose
    /// wardrobe item no longer exists are skipped and logged.
    pub fn load_items(&mut self, records_json: &str) -> String {
        let records = match serde_json::from_str::<Vec<OutfitItemRecord>>(records_json) {
            Ok(records) => records,
            Err(err) => {
                warn(&format!("outfit-canvas: undecodable outfit records: {err}"));
                return String::from("[]");
            }
        };
        let outcome = outfit::import(&records, &self.catalog);
        for id in &outcome.skipped {
            warn(&format!("outfit-canvas: skipping record for missing wardrobe item {id}"));
        }
        to_json(&self.core.load_items(outcome.items))
    }

    /// The save payload for the persistence API. Canvas state is left
    /// untouched, so a rejected save can simply be retried.
    #[must_use]
    pub fn export_outfit(&self, name: &str) -> String {
        let save = OutfitSave { name: name.to_string(), items: outfit::export(&self.core.items) };
        to_json(&save)
    }

    // --- Projections ---

    /// Live projection through the current viewport, as a JSON array of draw
    /// boxes in ascending stacking order.
    #[must_use]
    pub fn scene(&self) -> String {
        to_json(&render::project_live(&self.core.items, &self.core.viewport, &self.core.ui))
    }

    /// Fitted preview projection into a `width × height` box with the given
    /// padding, ignoring pan/zoom.
    #[must_use]
    pub fn preview(&self, width: f64, height: f64, padding: f64) -> String {
        to_json(&render::project_fitted(&self.core.items, Size::new(width, height), padding))
    }

    /// [`Self::preview`] with the standard thumbnail padding, for saved-outfit
    /// grid cards.
    #[must_use]
    pub fn thumbnail(&self, width: f64, height: f64) -> String {
        self.preview(width, height, PREVIEW_PADDING)
    }

    // --- Queries ---

    #[must_use]
    pub fn selected_id(&self) -> Option<String> {
        self.core.selection().cloned()
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.core.viewport.zoom
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.core.items.len()
    }
}

impl Default for OutfitCanvas {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_token(token: &str) -> Option<DropToken> {
    match Uuid::parse_str(token) {
        Ok(uuid) => Some(DropToken::from_uuid(uuid)),
        Err(err) => {
            warn(&format!("outfit-canvas: ignoring unknown drop token: {err}"));
            None
        }
    }
}
