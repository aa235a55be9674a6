//! Item model: catalog descriptors, placed items, and the in-memory store.
//!
//! This module defines the data types that describe what is on the canvas.
//! [`CatalogItem`] is the descriptor carried by the wardrobe panel's drag
//! payload; [`PlacedItem`] is one instance of a catalog item positioned on the
//! canvas; [`ItemStore`] is the runtime store that owns all live placements.
//!
//! Data flows into this layer from drops (via the engine's drop pipeline) and
//! from persisted outfits (via [`crate::outfit`]). The render layer reads from
//! `ItemStore` via `sorted_items` to determine draw order.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Identifier of a wardrobe catalog item. Opaque — assigned by the external
/// catalog store; each catalog item appears at most once on a canvas.
pub type ItemId = String;

/// A catalog item as carried by the drag payload and returned by catalog
/// lookups. `category` and `title` are display passthrough only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: ItemId,
    /// Opaque reference to the item's image, resolved by the host.
    pub image_url: String,
    pub category: String,
    pub title: String,
}

/// One instance of a catalog item positioned on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedItem {
    /// Catalog id of the underlying wardrobe item.
    pub id: ItemId,
    /// Image reference, passed through from the catalog descriptor.
    pub image_url: String,
    /// Category label, used only for display/alt text.
    pub category: String,
    /// Title, used only for display/alt text.
    pub title: String,
    /// Left edge of the bounding box in canvas coordinates.
    pub x: f64,
    /// Top edge of the bounding box in canvas coordinates.
    pub y: f64,
    /// Width in canvas units; at least `MIN_ITEM_DIM` at all times.
    pub width: f64,
    /// Height in canvas units; at least `MIN_ITEM_DIM` at all times.
    pub height: f64,
    /// Clockwise rotation in degrees; one of 0, 90, 180, 270.
    pub rotation: i32,
    /// Stacking order; lower values are drawn beneath higher values.
    pub z_index: i64,
    /// Fitted width at drop time; the reset-size target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub natural_width: Option<f64>,
    /// Fitted height at drop time; the reset-size target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub natural_height: Option<f64>,
}

/// In-memory store of placed items, keyed by catalog id.
pub struct ItemStore {
    items: HashMap<ItemId, PlacedItem>,
}

impl ItemStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { items: HashMap::new() }
    }

    /// Insert or replace an item. An existing placement with the same id is
    /// overwritten.
    pub fn insert(&mut self, item: PlacedItem) {
        self.items.insert(item.id.clone(), item);
    }

    /// Remove an item by id, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<PlacedItem> {
        self.items.remove(id)
    }

    /// Return a reference to an item by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PlacedItem> {
        self.items.get(id)
    }

    /// Return a mutable reference to an item by id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut PlacedItem> {
        self.items.get_mut(id)
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replace all items with a bulk-loaded set.
    pub fn load(&mut self, items: Vec<PlacedItem>) {
        self.items.clear();
        for item in items {
            self.items.insert(item.id.clone(), item);
        }
    }

    /// Return all items sorted by `(z_index, id)` for draw order.
    #[must_use]
    pub fn sorted_items(&self) -> Vec<&PlacedItem> {
        let mut items: Vec<&PlacedItem> = self.items.values().collect();
        items.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        items
    }

    /// Iterate over items in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedItem> {
        self.items.values()
    }

    /// The highest `z_index` currently in the store, or 0 when empty.
    #[must_use]
    pub fn max_z(&self) -> i64 {
        self.items.values().map(|i| i.z_index).max().unwrap_or(0)
    }

    /// Number of items currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
