//! Input model: buttons, keys, wheel deltas, and the gesture state machine.
//!
//! `GestureState` is the active gesture being tracked between pointer-down and
//! pointer-up. Both drag variants carry the state captured at gesture start so
//! every pointer-move computes its delta from the original anchor — absolute,
//! never incremental, which avoids drift from rounding across many move
//! events. The host subscribes to window-level move/up events only for the
//! lifetime of a gesture and unsubscribes when it ends.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;
use crate::item::ItemId;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held (also set synthetically by trackpad pinch).
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser
/// (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The id of the currently selected item, if any.
    pub selected_id: Option<ItemId>,
}

/// The gesture state machine.
///
/// Pointer-down on an item enters `DraggingItem`; pointer-down on the canvas
/// background enters `Panning`. The two are mutually exclusive — an item hit
/// suppresses the canvas-level pan for the duration of that gesture.
#[derive(Debug, Clone)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// The user is panning the canvas.
    Panning {
        /// `initial_pointer − initial_pan`, captured at gesture start;
        /// each move sets `pan = pointer − anchor`.
        anchor: Point,
    },
    /// The user is moving a placed item.
    DraggingItem {
        /// Id of the item being dragged.
        id: ItemId,
        /// Screen-space pointer position at gesture start.
        anchor_screen: Point,
        /// Item x at gesture start.
        orig_x: f64,
        /// Item y at gesture start.
        orig_y: f64,
    },
}

impl Default for GestureState {
    fn default() -> Self {
        Self::Idle
    }
}
