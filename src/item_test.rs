#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

fn make_item(id: &str, z: i64) -> PlacedItem {
    PlacedItem {
        id: id.to_string(),
        image_url: format!("https://img.example/{id}.jpg"),
        category: "tops".to_string(),
        title: format!("item {id}"),
        x: 0.0,
        y: 0.0,
        width: 150.0,
        height: 150.0,
        rotation: 0,
        z_index: z,
        natural_width: None,
        natural_height: None,
    }
}

// =============================================================
// CatalogItem serde
// =============================================================

#[test]
fn catalog_item_parses_camel_case_payload() {
    let json = r#"{
        "id": "cku1",
        "imageUrl": "https://img.example/cku1.jpg",
        "category": "shoes",
        "title": "white sneakers"
    }"#;
    let item: CatalogItem = serde_json::from_str(json).unwrap();
    assert_eq!(item.id, "cku1");
    assert_eq!(item.image_url, "https://img.example/cku1.jpg");
    assert_eq!(item.category, "shoes");
    assert_eq!(item.title, "white sneakers");
}

#[test]
fn catalog_item_rejects_missing_fields() {
    let json = r#"{"id": "cku1"}"#;
    assert!(serde_json::from_str::<CatalogItem>(json).is_err());
}

// =============================================================
// PlacedItem serde
// =============================================================

#[test]
fn placed_item_serializes_camel_case() {
    let item = make_item("a", 3);
    let json = serde_json::to_string(&item).unwrap();
    assert!(json.contains("\"imageUrl\""));
    assert!(json.contains("\"zIndex\":3"));
}

#[test]
fn placed_item_omits_absent_natural_size() {
    let item = make_item("a", 1);
    let json = serde_json::to_string(&item).unwrap();
    assert!(!json.contains("naturalWidth"));
    assert!(!json.contains("naturalHeight"));
}

#[test]
fn placed_item_round_trips() {
    let mut item = make_item("a", 7);
    item.natural_width = Some(120.0);
    item.natural_height = Some(90.0);
    item.rotation = 270;
    let json = serde_json::to_string(&item).unwrap();
    let back: PlacedItem = serde_json::from_str(&json).unwrap();
    assert_eq!(back, item);
}

// =============================================================
// ItemStore
// =============================================================

#[test]
fn new_store_is_empty() {
    let store = ItemStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn insert_and_get() {
    let mut store = ItemStore::new();
    store.insert(make_item("a", 1));
    assert!(store.get("a").is_some());
    assert!(store.get("b").is_none());
}

#[test]
fn insert_same_id_overwrites() {
    let mut store = ItemStore::new();
    store.insert(make_item("a", 1));
    let mut replacement = make_item("a", 5);
    replacement.x = 99.0;
    store.insert(replacement);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("a").unwrap().x, 99.0);
}

#[test]
fn remove_returns_item() {
    let mut store = ItemStore::new();
    store.insert(make_item("a", 1));
    let removed = store.remove("a");
    assert!(removed.is_some());
    assert!(store.is_empty());
}

#[test]
fn remove_missing_is_none() {
    let mut store = ItemStore::new();
    assert!(store.remove("nope").is_none());
}

#[test]
fn get_mut_allows_mutation() {
    let mut store = ItemStore::new();
    store.insert(make_item("a", 1));
    store.get_mut("a").unwrap().rotation = 90;
    assert_eq!(store.get("a").unwrap().rotation, 90);
}

#[test]
fn clear_empties_store() {
    let mut store = ItemStore::new();
    store.insert(make_item("a", 1));
    store.insert(make_item("b", 2));
    store.clear();
    assert!(store.is_empty());
}

#[test]
fn load_replaces_contents() {
    let mut store = ItemStore::new();
    store.insert(make_item("old", 1));
    store.load(vec![make_item("a", 1), make_item("b", 2)]);
    assert_eq!(store.len(), 2);
    assert!(store.get("old").is_none());
}

#[test]
fn sorted_items_orders_by_z() {
    let mut store = ItemStore::new();
    store.insert(make_item("a", 5));
    store.insert(make_item("b", 1));
    store.insert(make_item("c", 3));
    let order: Vec<&str> = store.sorted_items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(order, vec!["b", "c", "a"]);
}

#[test]
fn sorted_items_ties_break_by_id() {
    let mut store = ItemStore::new();
    store.insert(make_item("b", 1));
    store.insert(make_item("a", 1));
    let order: Vec<&str> = store.sorted_items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(order, vec!["a", "b"]);
}

#[test]
fn sorted_items_z_need_not_be_contiguous() {
    let mut store = ItemStore::new();
    store.insert(make_item("a", 2));
    store.insert(make_item("b", 40));
    store.insert(make_item("c", 7));
    let order: Vec<i64> = store.sorted_items().iter().map(|i| i.z_index).collect();
    assert_eq!(order, vec![2, 7, 40]);
}

#[test]
fn max_z_empty_is_zero() {
    assert_eq!(ItemStore::new().max_z(), 0);
}

#[test]
fn max_z_tracks_highest() {
    let mut store = ItemStore::new();
    store.insert(make_item("a", 3));
    store.insert(make_item("b", 11));
    assert_eq!(store.max_z(), 11);
}
