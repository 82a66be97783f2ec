//! Wishlist subcommands.

use artstop_core::{ProductId, Selector};
use artstop_store::{CatalogStore, KeyValue, LineItemStore, Role, StoreError};

fn store<S: KeyValue + Clone>(kv: &S) -> LineItemStore<S> {
    LineItemStore::new(kv.clone(), Role::Wishlist)
}

/// Print the wishlist.
pub fn list<S: KeyValue + Clone>(kv: &S) {
    let items = store(kv).read_all();
    if items.is_empty() {
        println!("Wishlist is empty");
        return;
    }
    for item in &items {
        println!("[{}] {}  {}", item.id, item.name, item.price);
    }
}

/// Add a catalog product to the wishlist (duplicate adds are no-ops).
///
/// # Errors
///
/// Fails when the product id is unknown or persistence fails.
pub fn add<S: KeyValue + Clone>(kv: &S, id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = CatalogStore::new(kv.clone());
    let product = catalog
        .product(ProductId::new(id))
        .ok_or_else(|| format!("no product with id {id}"))?;
    store(kv).add(&product, &Selector::none(), 1)?;
    println!("Added {} to wishlist", product.name);
    Ok(())
}

/// Remove a product from the wishlist (no-op when absent).
///
/// # Errors
///
/// Fails only when persistence fails.
pub fn remove<S: KeyValue + Clone>(kv: &S, id: i32) -> Result<(), StoreError> {
    store(kv).remove(ProductId::new(id), None)?;
    println!("Removed product {id} from wishlist");
    Ok(())
}

/// Move a wishlist entry into the cart.
///
/// # Errors
///
/// Fails only when persistence fails.
pub fn move_to_cart<S: KeyValue + Clone>(kv: &S, id: i32) -> Result<(), StoreError> {
    let wishlist = store(kv);
    let cart = LineItemStore::new(kv.clone(), Role::Cart);
    wishlist.move_to_cart(&cart, ProductId::new(id))?;
    println!("Moved product {id} to cart");
    Ok(())
}
