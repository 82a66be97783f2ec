//! Cross-store cart/wishlist lifecycles and change notifications.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use artstop_core::{ProductId, Selector};
use artstop_store::{CatalogStore, LineItemStore, MemoryStore, Role};

struct Stores {
    catalog: CatalogStore<MemoryStore>,
    cart: LineItemStore<MemoryStore>,
    wishlist: LineItemStore<MemoryStore>,
}

fn stores() -> Stores {
    let kv = MemoryStore::new();
    Stores {
        catalog: CatalogStore::new(kv.clone()),
        cart: LineItemStore::new(kv.clone(), Role::Cart),
        wishlist: LineItemStore::new(kv, Role::Wishlist),
    }
}

// =============================================================================
// Cart Lifecycle
// =============================================================================

#[test]
fn test_add_from_catalog_snapshots_display_fields() {
    let s = stores();
    let product = s.catalog.product(ProductId::new(1)).expect("seed product");

    s.cart
        .add(
            &product,
            &Selector {
                variant: Some("large".to_string()),
                color: Some("Gold".to_string()),
            },
            1,
        )
        .unwrap();

    let items = s.cart.read_all();
    let item = items.first().expect("one line item");
    assert_eq!(item.name, product.name);
    assert_eq!(item.image, product.images.first().cloned().unwrap_or_default());
    // Variant price, not base price.
    assert_eq!(item.price.amount(), 12_000);
}

#[test]
fn test_snapshot_survives_product_edit() {
    let s = stores();
    let mut product = s.catalog.product(ProductId::new(3)).expect("seed product");

    s.cart.add(&product, &Selector::none(), 1).unwrap();

    // Admin renames and reprices the product afterwards; the price increase
    // ends the discount, so the old price goes away with it.
    product.name = "Renamed Canvas".to_string();
    product.price = artstop_core::Price::new(9999);
    product.old_price = None;
    assert!(s.catalog.update_product(product).unwrap());

    let items = s.cart.read_all();
    let item = items.first().expect("one line item");
    assert_eq!(item.name, "Modern Islamic Geometric Pattern Canvas");
    assert_eq!(item.price.amount(), 4500);
}

#[test]
fn test_repeated_add_merges_into_one_line() {
    let s = stores();
    let product = s.catalog.product(ProductId::new(2)).expect("seed product");

    s.cart.add(&product, &Selector::none(), 1).unwrap();
    s.cart.add(&product, &Selector::none(), 1).unwrap();

    let items = s.cart.read_all();
    assert_eq!(items.len(), 1);
    assert_eq!(items.first().map(|i| i.quantity), Some(2));
}

// =============================================================================
// Wishlist and Move-to-Cart
// =============================================================================

#[test]
fn test_wishlist_dedup_then_move_to_cart() {
    let s = stores();
    let product = s.catalog.product(ProductId::new(4)).expect("seed product");

    s.wishlist.add(&product, &Selector::none(), 1).unwrap();
    s.wishlist.add(&product, &Selector::none(), 1).unwrap();
    assert_eq!(s.wishlist.read_all().len(), 1);

    // Product already in the cart: move merges instead of duplicating.
    s.cart.add(&product, &Selector::none(), 1).unwrap();
    s.wishlist.move_to_cart(&s.cart, product.id).unwrap();

    assert!(s.wishlist.read_all().is_empty());
    let cart_items = s.cart.read_all();
    assert_eq!(cart_items.len(), 1);
    assert_eq!(cart_items.first().map(|i| i.quantity), Some(2));
}

#[test]
fn test_stores_are_independent_per_role() {
    let s = stores();
    let product = s.catalog.product(ProductId::new(5)).expect("seed product");

    s.wishlist.add(&product, &Selector::none(), 1).unwrap();
    assert!(s.cart.read_all().is_empty());

    s.cart.add(&product, &Selector::none(), 3).unwrap();
    s.cart.clear().unwrap();
    assert_eq!(s.wishlist.read_all().len(), 1);
}

// =============================================================================
// Change Signals
// =============================================================================

#[test]
fn test_badge_counter_subscription() {
    let s = stores();
    let product = s.catalog.product(ProductId::new(1)).expect("seed product");

    // A navbar badge: re-reads the store on every change.
    let badge = Arc::new(AtomicUsize::new(0));
    let badge_writer = Arc::clone(&badge);
    let cart_for_listener = s.cart.clone();
    s.cart.subscribe(move |event| {
        assert_eq!(event.role, Role::Cart);
        badge_writer.store(
            cart_for_listener.total_quantity() as usize,
            Ordering::SeqCst,
        );
    });

    s.cart.add(&product, &Selector::none(), 2).unwrap();
    assert_eq!(badge.load(Ordering::SeqCst), 2);

    s.cart.add(&product, &Selector::none(), 1).unwrap();
    assert_eq!(badge.load(Ordering::SeqCst), 3);

    s.cart.clear().unwrap();
    assert_eq!(badge.load(Ordering::SeqCst), 0);
}

#[test]
fn test_wishlist_signal_not_fired_for_cart_changes() {
    let s = stores();
    let product = s.catalog.product(ProductId::new(1)).expect("seed product");

    let wishlist_events = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&wishlist_events);
    s.wishlist.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    s.cart.add(&product, &Selector::none(), 1).unwrap();
    s.cart.clear().unwrap();
    assert_eq!(wishlist_events.load(Ordering::SeqCst), 0);

    s.wishlist.add(&product, &Selector::none(), 1).unwrap();
    assert_eq!(wishlist_events.load(Ordering::SeqCst), 1);
}
