//! Serialization bridge between the live item set and persisted outfits.
//!
//! The external store only ever sees the flat [`OutfitItemRecord`] list —
//! placement tuples plus the catalog reference needed to re-resolve the
//! image. Export strips engine-local transients; import re-hydrates records
//! by joining against the catalog, skipping (never failing on) records whose
//! wardrobe item has since been deleted.

#[cfg(test)]
#[path = "outfit_test.rs"]
mod outfit_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::item::{CatalogItem, ItemId, ItemStore, PlacedItem};

/// One persisted placement, exactly as stored by the outfit API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitItemRecord {
    /// Catalog id of the placed wardrobe item.
    pub item_id: ItemId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: i32,
    pub z_index: i64,
}

/// The save payload handed to the persistence API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitSave {
    pub name: String,
    pub items: Vec<OutfitItemRecord>,
}

/// Result of re-hydrating persisted records against the catalog.
#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    /// Successfully re-hydrated placements.
    pub items: Vec<PlacedItem>,
    /// Ids whose catalog item no longer exists; the outfit loads without
    /// them. The host logs these.
    pub skipped: Vec<ItemId>,
}

/// Capability to resolve a catalog id back to its descriptor on import.
pub trait CatalogLookup {
    fn lookup(&self, id: &str) -> Option<&CatalogItem>;
}

impl CatalogLookup for HashMap<ItemId, CatalogItem> {
    fn lookup(&self, id: &str) -> Option<&CatalogItem> {
        self.get(id)
    }
}

/// Flatten the live item set into persisted records, z-sorted for a stable
/// on-disk order. Natural-size hints are engine-local and do not survive.
#[must_use]
pub fn export(items: &ItemStore) -> Vec<OutfitItemRecord> {
    items
        .sorted_items()
        .into_iter()
        .map(|item| OutfitItemRecord {
            item_id: item.id.clone(),
            x: item.x,
            y: item.y,
            width: item.width,
            height: item.height,
            rotation: item.rotation,
            z_index: item.z_index,
        })
        .collect()
}

/// Re-hydrate persisted records by joining each against the catalog.
///
/// A record whose referenced catalog item no longer resolves is collected in
/// [`ImportOutcome::skipped`] rather than failing the load.
#[must_use]
pub fn import(records: &[OutfitItemRecord], catalog: &impl CatalogLookup) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();
    for record in records {
        let Some(descriptor) = catalog.lookup(&record.item_id) else {
            outcome.skipped.push(record.item_id.clone());
            continue;
        };
        outcome.items.push(PlacedItem {
            id: descriptor.id.clone(),
            image_url: descriptor.image_url.clone(),
            category: descriptor.category.clone(),
            title: descriptor.title.clone(),
            x: record.x,
            y: record.y,
            width: record.width,
            height: record.height,
            rotation: record.rotation,
            z_index: record.z_index,
            natural_width: None,
            natural_height: None,
        });
    }
    outcome
}
