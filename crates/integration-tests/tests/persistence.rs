//! Seed fallback, corruption recovery, and round-trip persistence.

use artstop_core::{LineItem, Price, ProductId};
use artstop_store::{
    CatalogStore, KeyValue, LineItemStore, MemoryStore, OrdersStore, Role, seed,
};

fn line_item(id: i32) -> LineItem {
    LineItem {
        id: ProductId::new(id),
        name: format!("Product {id}"),
        price: Price::new(1000),
        image: format!("https://example.com/{id}.jpg"),
        variant: None,
        color: None,
        quantity: 1,
    }
}

// =============================================================================
// Round-trips
// =============================================================================

#[test]
fn test_replace_all_round_trip_preserves_order() {
    let store = LineItemStore::new(MemoryStore::new(), Role::Cart);
    let items = vec![line_item(5), line_item(2), line_item(9)];
    store.replace_all(items.clone()).unwrap();
    assert_eq!(store.read_all(), items);
}

#[test]
fn test_persisted_shape_matches_storefront_layout() {
    // The stores write the same camelCase JSON the web storefront persisted,
    // under the same keys.
    let kv = MemoryStore::new();
    let cart = LineItemStore::new(kv.clone(), Role::Cart);
    cart.replace_all(vec![line_item(1)]).unwrap();

    let raw = kv.get("artstop_cart").expect("cart persisted");
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = parsed.get(0).expect("one entry");
    assert_eq!(entry["id"], 1);
    assert!(entry.get("quantity").is_some());
    assert!(entry.get("image").is_some());
}

#[test]
fn test_stores_read_data_persisted_by_another_handle() {
    let kv = MemoryStore::new();
    let writer = LineItemStore::new(kv.clone(), Role::Wishlist);
    let reader = LineItemStore::new(kv, Role::Wishlist);

    writer.replace_all(vec![line_item(3)]).unwrap();
    assert_eq!(reader.read_all().len(), 1);
}

// =============================================================================
// Fallbacks
// =============================================================================

#[test]
fn test_fresh_surface_serves_seed_catalog_and_orders() {
    let kv = MemoryStore::new();
    assert_eq!(CatalogStore::new(kv.clone()).products(), seed::products());
    assert_eq!(CatalogStore::new(kv.clone()).categories(), seed::categories());
    assert_eq!(OrdersStore::new(kv).read_all(), seed::orders());
}

#[test]
fn test_corruption_recovers_without_error() {
    let kv = MemoryStore::new();
    kv.set("artstop_cart", "{broken").unwrap();
    kv.set("artstop_products", "42").unwrap();
    kv.set("artstop_orders", "[{\"id\": true}]").unwrap();

    // Line items: corrupt means empty.
    assert!(LineItemStore::new(kv.clone(), Role::Cart).read_all().is_empty());
    // Catalog and orders: corrupt means seed.
    assert_eq!(CatalogStore::new(kv.clone()).products(), seed::products());
    assert_eq!(OrdersStore::new(kv).read_all(), seed::orders());
}

#[test]
fn test_write_after_corruption_heals_the_slot() {
    let kv = MemoryStore::new();
    kv.set("artstop_wishlist", "oops").unwrap();

    let store = LineItemStore::new(kv, Role::Wishlist);
    assert!(store.read_all().is_empty());

    store.replace_all(vec![line_item(7)]).unwrap();
    assert_eq!(store.read_all().len(), 1);
}
