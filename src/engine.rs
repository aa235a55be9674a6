//! The placement engine: item set, selection, gestures, and the drop pipeline.
//!
//! [`EngineCore`] owns every piece of canvas state — the item store, the
//! selection, the active gesture, and the viewport — and is mutated only
//! through the operations below, which centralize the invariants (monotonic
//! `z_index`, the minimum-size floor, the rotation set) that would otherwise
//! be scattered across event handlers. It is free of browser types and fully
//! testable natively; the `wasm-bindgen` wrapper lives in [`crate::host`].
//!
//! Drops are a two-phase pipeline: [`EngineCore::begin_drop`] parses the drag
//! payload and records a pending drop, then the host measures the image
//! asynchronously and calls [`EngineCore::resolve_drop`] with the natural
//! dimensions (or `None` when the probe failed). A generation counter guards
//! against probes that resolve after the canvas was cleared or replaced.

use std::collections::HashMap;

use uuid::Uuid;

use crate::consts::{
    DEFAULT_ITEM_SIZE, MIN_ITEM_DIM, NATURAL_FIT_MAX, ZOOM_BUTTON_STEP, ZOOM_WHEEL_STEP,
};
use crate::geometry::{Point, Size};
use crate::input::{Button, GestureState, Key, Modifiers, UiState, WheelDelta};
use crate::item::{CatalogItem, ItemId, ItemStore, PlacedItem};
use crate::viewport::Viewport;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Canvas state changed in a way that requires a redraw.
    RenderNeeded,
    /// The host should set the given CSS cursor on the canvas element.
    SetCursor(String),
}

/// Token identifying an outstanding drop whose dimension probe has not yet
/// resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropToken(Uuid);

impl DropToken {
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

/// A drop waiting on its image-dimension probe.
#[derive(Debug, Clone)]
struct PendingDrop {
    descriptor: CatalogItem,
    /// Drop point converted to canvas space with the viewport current at drop
    /// time.
    canvas_point: Point,
    /// Engine generation at drop time; a mismatch at resolve time means the
    /// canvas was cleared or replaced and the probe result is discarded.
    generation: u64,
}

/// Core engine state. All mutations flow through the operations below.
pub struct EngineCore {
    pub items: ItemStore,
    pub viewport: Viewport,
    pub ui: UiState,
    pub gesture: GestureState,
    pub viewport_width: f64,
    pub viewport_height: f64,
    next_z: i64,
    generation: u64,
    pending_drops: HashMap<DropToken, PendingDrop>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            items: ItemStore::new(),
            viewport: Viewport::default(),
            ui: UiState::default(),
            gesture: GestureState::Idle,
            viewport_width: 0.0,
            viewport_height: 0.0,
            next_z: 1,
            generation: 0,
            pending_drops: HashMap::new(),
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    /// The currently selected item, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&ItemId> {
        self.ui.selected_id.as_ref()
    }

    /// Look up a placed item by catalog id.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&PlacedItem> {
        self.items.get(id)
    }

    /// Clone of the current item set, in arbitrary order.
    #[must_use]
    pub fn get_items(&self) -> Vec<PlacedItem> {
        self.items.iter().cloned().collect()
    }

    /// The `z_index` the next placement or promotion will receive.
    #[must_use]
    pub fn next_z(&self) -> i64 {
        self.next_z
    }

    /// Number of drops still waiting on their dimension probe.
    #[must_use]
    pub fn pending_drop_count(&self) -> usize {
        self.pending_drops.len()
    }

    // --- Viewport ---

    /// Update the canvas element's CSS-pixel dimensions (used as the focal
    /// point for button zoom).
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
    }

    fn viewport_center(&self) -> Point {
        Point::new(self.viewport_width * 0.5, self.viewport_height * 0.5)
    }

    /// Toolbar zoom-in, focused at the viewport center.
    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.viewport.zoom_by(ZOOM_BUTTON_STEP, self.viewport_center());
        vec![Action::RenderNeeded]
    }

    /// Toolbar zoom-out, focused at the viewport center.
    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.viewport.zoom_by(1.0 / ZOOM_BUTTON_STEP, self.viewport_center());
        vec![Action::RenderNeeded]
    }

    // --- Drop pipeline ---

    /// Phase one of a drop: parse the drag payload and record a pending drop.
    ///
    /// The drop point is converted to canvas space with the current viewport;
    /// the placement itself happens in [`Self::resolve_drop`] once the host
    /// has probed the image's natural dimensions.
    ///
    /// # Errors
    ///
    /// Returns the parse error for a malformed payload. The canvas is left
    /// untouched — a bad drop is a logged no-op, never an interruption.
    pub fn begin_drop(
        &mut self,
        payload_json: &str,
        screen_pt: Point,
    ) -> Result<DropToken, serde_json::Error> {
        let descriptor: CatalogItem = serde_json::from_str(payload_json)?;
        let token = DropToken(Uuid::new_v4());
        self.pending_drops.insert(
            token,
            PendingDrop {
                descriptor,
                canvas_point: self.viewport.screen_to_canvas(screen_pt),
                generation: self.generation,
            },
        );
        Ok(token)
    }

    /// Phase two of a drop: place the item once its dimension probe resolves.
    ///
    /// `natural` is the image's reported size, or `None` when the probe
    /// failed (the fixed default size is used instead). Unknown tokens and
    /// probes whose generation is stale — the canvas was cleared or replaced
    /// while the probe was outstanding — are silently discarded.
    ///
    /// The item receives the `z_index` current at resolve time, not at drop
    /// time; rapid drops whose probes resolve out of order may therefore
    /// interleave their final stacking. This matches the observed behavior of
    /// the planner and is accepted.
    ///
    /// The store is keyed by catalog id, so dropping an item that is already
    /// placed replaces its placement wholesale.
    pub fn resolve_drop(&mut self, token: DropToken, natural: Option<Size>) -> Vec<Action> {
        let Some(pending) = self.pending_drops.remove(&token) else {
            return Vec::new();
        };
        if pending.generation != self.generation {
            return Vec::new();
        }

        let fitted = natural
            .map(|size| size.fit_within(NATURAL_FIT_MAX))
            .unwrap_or(Size::new(DEFAULT_ITEM_SIZE, DEFAULT_ITEM_SIZE));
        let width = fitted.width.max(MIN_ITEM_DIM);
        let height = fitted.height.max(MIN_ITEM_DIM);

        let descriptor = pending.descriptor;
        let item = PlacedItem {
            id: descriptor.id,
            image_url: descriptor.image_url,
            category: descriptor.category,
            title: descriptor.title,
            x: pending.canvas_point.x - width / 2.0,
            y: pending.canvas_point.y - height / 2.0,
            width,
            height,
            rotation: 0,
            z_index: self.bump_z(),
            natural_width: Some(width),
            natural_height: Some(height),
        };
        self.items.insert(item);
        vec![Action::RenderNeeded]
    }

    fn bump_z(&mut self) -> i64 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    // --- Pointer events ---

    /// Pointer-down on a placed item: select it, bring it to the front, and
    /// start a drag. Suppresses the canvas-level pan for this gesture.
    pub fn on_item_pointer_down(&mut self, id: &str, screen_pt: Point) -> Vec<Action> {
        let Some(item) = self.items.get_mut(id) else {
            return Vec::new();
        };
        item.z_index = self.next_z;
        self.next_z += 1;
        self.ui.selected_id = Some(item.id.clone());
        self.gesture = GestureState::DraggingItem {
            id: item.id.clone(),
            anchor_screen: screen_pt,
            orig_x: item.x,
            orig_y: item.y,
        };
        vec![Action::SetCursor("grabbing".into()), Action::RenderNeeded]
    }

    /// Pointer-down on the canvas background: deselect and start panning.
    /// Middle button pans regardless of target — including over an item — and
    /// therefore never touches the selection; secondary is a no-op.
    pub fn on_canvas_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button == Button::Secondary {
            return Vec::new();
        }
        let had_selection = button == Button::Primary && self.ui.selected_id.take().is_some();
        self.gesture = GestureState::Panning {
            anchor: Point::new(
                screen_pt.x - self.viewport.pan_x,
                screen_pt.y - self.viewport.pan_y,
            ),
        };
        let mut actions = vec![Action::SetCursor("grabbing".into())];
        if had_selection {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Pointer-move: advance the active gesture, if any.
    ///
    /// Deltas are computed from the anchor captured at gesture start, never
    /// from the previous event, so repeated moves cannot accumulate rounding
    /// drift.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        match &self.gesture {
            GestureState::Idle => Vec::new(),
            GestureState::Panning { anchor } => {
                self.viewport.pan_x = screen_pt.x - anchor.x;
                self.viewport.pan_y = screen_pt.y - anchor.y;
                vec![Action::RenderNeeded]
            }
            GestureState::DraggingItem { id, anchor_screen, orig_x, orig_y } => {
                let dx = self.viewport.screen_dist_to_canvas(screen_pt.x - anchor_screen.x);
                let dy = self.viewport.screen_dist_to_canvas(screen_pt.y - anchor_screen.y);
                let (x, y) = (orig_x + dx, orig_y + dy);
                let id = id.clone();
                if let Some(item) = self.items.get_mut(&id) {
                    item.x = x;
                    item.y = y;
                }
                vec![Action::RenderNeeded]
            }
        }
    }

    /// Pointer-up: end the active gesture. Selection is kept.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.end_gesture()
    }

    /// Pointer-leave: treated exactly like pointer-up so a gesture cannot
    /// keep tracking after the pointer left the canvas.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_gesture()
    }

    fn end_gesture(&mut self) -> Vec<Action> {
        if matches!(self.gesture, GestureState::Idle) {
            return Vec::new();
        }
        self.gesture = GestureState::Idle;
        vec![Action::SetCursor("default".into())]
    }

    /// Wheel input: ctrl (or trackpad pinch) zooms about the cursor, a plain
    /// wheel pans.
    pub fn on_wheel(
        &mut self,
        screen_pt: Point,
        delta: WheelDelta,
        modifiers: Modifiers,
    ) -> Vec<Action> {
        if modifiers.ctrl {
            let factor = if delta.dy < 0.0 { ZOOM_WHEEL_STEP } else { 1.0 / ZOOM_WHEEL_STEP };
            self.viewport.zoom_by(factor, screen_pt);
        } else {
            self.viewport.pan_x -= delta.dx;
            self.viewport.pan_y -= delta.dy;
        }
        vec![Action::RenderNeeded]
    }

    /// Key-down: Delete/Backspace removes the selection, Escape cancels.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        match key.0.as_str() {
            "Delete" | "Backspace" => self.delete_selected(),
            "Escape" => self.cancel(),
            _ => Vec::new(),
        }
    }

    /// Cancel gesture: drop the selection and abort any in-progress drag.
    ///
    /// Positions update live during a drag, so whatever movement has already
    /// been applied stays applied — cancellation only stops further updates.
    pub fn cancel(&mut self) -> Vec<Action> {
        let had_selection = self.ui.selected_id.take().is_some();
        let had_gesture = !matches!(self.gesture, GestureState::Idle);
        self.gesture = GestureState::Idle;
        if !had_selection && !had_gesture {
            return Vec::new();
        }
        let mut actions = Vec::new();
        if had_gesture {
            actions.push(Action::SetCursor("default".into()));
        }
        if had_selection {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    // --- Selection operations ---

    /// Delete the selected item. No-op when nothing is selected, so a second
    /// call is always safe.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        let Some(id) = self.ui.selected_id.take() else {
            return Vec::new();
        };
        self.items.remove(&id);
        if let GestureState::DraggingItem { id: drag_id, .. } = &self.gesture {
            if *drag_id == id {
                self.gesture = GestureState::Idle;
            }
        }
        vec![Action::RenderNeeded]
    }

    /// Rotate the selected item by a quarter turn, wrapping modulo 360.
    pub fn rotate_selected(&mut self) -> Vec<Action> {
        let Some(item) = self.selected_item_mut() else {
            return Vec::new();
        };
        item.rotation = (item.rotation + 90) % 360;
        vec![Action::RenderNeeded]
    }

    /// Grow or shrink the selected item by a uniform delta on both axes,
    /// floored at the minimum dimension. The uniform delta only preserves
    /// aspect ratio when width and height are equal; that matches the
    /// planner's observed behavior and is kept as-is.
    pub fn resize_selected(&mut self, delta: f64) -> Vec<Action> {
        let Some(item) = self.selected_item_mut() else {
            return Vec::new();
        };
        item.width = (item.width + delta).max(MIN_ITEM_DIM);
        item.height = (item.height + delta).max(MIN_ITEM_DIM);
        vec![Action::RenderNeeded]
    }

    /// Restore the selected item to its fitted size at drop time. No-op when
    /// no natural size was recorded (e.g. items restored from a saved outfit).
    pub fn reset_selected_size(&mut self) -> Vec<Action> {
        let Some(item) = self.selected_item_mut() else {
            return Vec::new();
        };
        let (Some(width), Some(height)) = (item.natural_width, item.natural_height) else {
            return Vec::new();
        };
        item.width = width;
        item.height = height;
        vec![Action::RenderNeeded]
    }

    fn selected_item_mut(&mut self) -> Option<&mut PlacedItem> {
        let id = self.ui.selected_id.clone()?;
        self.items.get_mut(&id)
    }

    // --- Bulk operations ---

    /// Empty the canvas. The z counter keeps counting — it is monotonic for
    /// the lifetime of the engine — and outstanding probes are invalidated.
    pub fn clear(&mut self) -> Vec<Action> {
        self.items.clear();
        self.ui.selected_id = None;
        self.gesture = GestureState::Idle;
        self.generation += 1;
        vec![Action::RenderNeeded]
    }

    /// Bulk-load a restored outfit, replacing the current set.
    ///
    /// Future placements must draw above everything restored, so the z
    /// counter jumps past the highest loaded `z_index`. Selection is cleared
    /// and outstanding probes are invalidated.
    pub fn load_items(&mut self, items: Vec<PlacedItem>) -> Vec<Action> {
        self.items.load(items);
        self.next_z = 1 + self.items.max_z().max(0);
        self.ui.selected_id = None;
        self.gesture = GestureState::Idle;
        self.generation += 1;
        vec![Action::RenderNeeded]
    }
}
