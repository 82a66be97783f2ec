//! Cart subcommands.

use artstop_core::{ProductId, Selector};
use artstop_store::{CatalogStore, KeyValue, LineItemStore, Role, StoreError};

fn store<S: KeyValue + Clone>(kv: &S) -> LineItemStore<S> {
    LineItemStore::new(kv.clone(), Role::Cart)
}

/// Print the cart contents and total.
pub fn list<S: KeyValue + Clone>(kv: &S) {
    let cart = store(kv);
    let items = cart.read_all();
    if items.is_empty() {
        println!("Cart is empty");
        return;
    }
    let mut total = artstop_core::Price::default();
    for item in &items {
        let selector = [item.variant.as_deref(), item.color.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ");
        let suffix = if selector.is_empty() {
            String::new()
        } else {
            format!(" ({selector})")
        };
        println!(
            "[{}] {}{suffix}  x{}  = {}",
            item.id,
            item.name,
            item.quantity,
            item.line_total(),
        );
        total = total.saturating_add(item.line_total());
    }
    println!("Total: {total} ({} items)", cart.total_quantity());
}

/// Add a catalog product to the cart.
///
/// # Errors
///
/// Fails when the product id is unknown or persistence fails.
pub fn add<S: KeyValue + Clone>(
    kv: &S,
    id: i32,
    variant: Option<String>,
    color: Option<String>,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = CatalogStore::new(kv.clone());
    let product = catalog
        .product(ProductId::new(id))
        .ok_or_else(|| format!("no product with id {id}"))?;
    let cart = store(kv);
    cart.add(&product, &Selector { variant, color }, quantity)?;
    println!("Added {} to cart", product.name);
    Ok(())
}

/// Remove a line item (no-op when absent).
///
/// # Errors
///
/// Fails only when persistence fails.
pub fn remove<S: KeyValue + Clone>(
    kv: &S,
    id: i32,
    variant: Option<String>,
    color: Option<String>,
) -> Result<(), StoreError> {
    let selector = Selector { variant, color };
    store(kv).remove(ProductId::new(id), Some(&selector))?;
    println!("Removed product {id} from cart");
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Fails only when persistence fails.
pub fn clear<S: KeyValue + Clone>(kv: &S) -> Result<(), StoreError> {
    store(kv).clear()?;
    println!("Cart cleared");
    Ok(())
}
