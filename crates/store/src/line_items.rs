//! Cart and wishlist stores.
//!
//! Both roles share the same mechanics - a persisted, deduplicated sequence
//! of [`LineItem`]s - but differ in identity and quantity rules:
//!
//! - **Cart**: identity is `(product, variant, color)`; adding a matching
//!   item again increments its quantity.
//! - **Wishlist**: identity is the product id alone; a duplicate add is a
//!   no-op and quantities are ignored.

use artstop_core::{LineItem, Product, ProductId, Selector};

use crate::kv::{KeyValue, StoreError, read_json, write_json};
use crate::signal::{Signal, SubscriberId};

/// Which named persisted list a store targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Cart,
    Wishlist,
}

impl Role {
    /// Persistence key for this role.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Cart => "artstop_cart",
            Self::Wishlist => "artstop_wishlist",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cart => write!(f, "cart"),
            Self::Wishlist => write!(f, "wishlist"),
        }
    }
}

/// Change notification payload for a line-item store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineItemsChanged {
    pub role: Role,
}

/// A persisted cart or wishlist.
///
/// Clones share the same persistence surface and signal.
#[derive(Clone)]
pub struct LineItemStore<S> {
    kv: S,
    role: Role,
    changed: Signal<LineItemsChanged>,
}

impl<S: KeyValue> LineItemStore<S> {
    /// Bind a store to its role's persistence key.
    pub fn new(kv: S, role: Role) -> Self {
        Self {
            kv,
            role,
            changed: Signal::new(),
        }
    }

    /// The role this store serves.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Subscribe to this store's change signal.
    pub fn subscribe(
        &self,
        listener: impl Fn(&LineItemsChanged) + Send + Sync + 'static,
    ) -> SubscriberId {
        self.changed.subscribe(listener)
    }

    /// Detach a previously subscribed listener.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        self.changed.unsubscribe(id)
    }

    /// Read the persisted sequence. Absent or corrupt data yields an empty
    /// list; this never fails.
    #[must_use]
    pub fn read_all(&self) -> Vec<LineItem> {
        read_json(&self.kv, self.role.key()).unwrap_or_default()
    }

    /// Total quantity across all line items (the badge count for carts;
    /// equals the entry count for wishlists).
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.read_all()
            .iter()
            .fold(0, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Add a product, snapshotting its display fields at call time.
    ///
    /// # Errors
    ///
    /// Propagates persistence failures from the key-value surface.
    pub fn add(
        &self,
        product: &Product,
        selector: &Selector,
        quantity: u32,
    ) -> Result<(), StoreError> {
        self.add_item(LineItem::from_product(product, selector, quantity))
    }

    /// Add an already-snapshotted line item (used by move-to-cart, which
    /// carries the wishlist snapshot rather than re-reading the product).
    ///
    /// # Errors
    ///
    /// Propagates persistence failures from the key-value surface.
    pub fn add_item(&self, item: LineItem) -> Result<(), StoreError> {
        let mut items = self.read_all();
        match self.role {
            Role::Cart => {
                let selector = Selector {
                    variant: item.variant.clone(),
                    color: item.color.clone(),
                };
                if let Some(existing) = items
                    .iter_mut()
                    .find(|existing| existing.matches_cart(item.id, &selector))
                {
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                } else {
                    items.push(item);
                }
            }
            Role::Wishlist => {
                // Duplicate wishlist add: no new entry, no persist, no signal.
                if items.iter().any(|existing| existing.matches_wishlist(item.id)) {
                    return Ok(());
                }
                items.push(LineItem {
                    quantity: 1,
                    ..item
                });
            }
        }
        self.persist(&items)
    }

    /// Remove the single line item matching the role's identity rule.
    /// Absent items are a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Propagates persistence failures from the key-value surface.
    pub fn remove(&self, id: ProductId, selector: Option<&Selector>) -> Result<(), StoreError> {
        let mut items = self.read_all();
        let default_selector = Selector::none();
        let selector = selector.unwrap_or(&default_selector);
        let position = items.iter().position(|item| match self.role {
            Role::Cart => item.matches_cart(id, selector),
            Role::Wishlist => item.matches_wishlist(id),
        });
        match position {
            Some(index) => {
                items.remove(index);
                self.persist(&items)
            }
            None => Ok(()),
        }
    }

    /// Drop every line item.
    ///
    /// # Errors
    ///
    /// Propagates persistence failures from the key-value surface.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.persist(&[])
    }

    /// Wholesale replacement of the persisted sequence, order-preserving.
    ///
    /// # Errors
    ///
    /// Propagates persistence failures from the key-value surface.
    pub fn replace_all(&self, items: Vec<LineItem>) -> Result<(), StoreError> {
        self.persist(&items)
    }

    /// Move a wishlist entry into a cart: remove here, add there.
    ///
    /// The two steps are independently idempotent single-store operations,
    /// not a transaction; each fires its own signal. A missing wishlist
    /// entry makes the whole call a no-op.
    ///
    /// # Errors
    ///
    /// [`StoreError::RoleMismatch`] unless `self` is the wishlist and
    /// `cart` is the cart; otherwise persistence failures.
    pub fn move_to_cart(&self, cart: &Self, id: ProductId) -> Result<(), StoreError> {
        if self.role != Role::Wishlist {
            return Err(StoreError::RoleMismatch {
                expected: "wishlist",
            });
        }
        if cart.role != Role::Cart {
            return Err(StoreError::RoleMismatch { expected: "cart" });
        }
        let Some(item) = self
            .read_all()
            .into_iter()
            .find(|item| item.matches_wishlist(id))
        else {
            return Ok(());
        };
        self.remove(id, None)?;
        cart.add_item(LineItem { quantity: 1, ..item })
    }

    fn persist(&self, items: &[LineItem]) -> Result<(), StoreError> {
        write_json(&self.kv, self.role.key(), &items)?;
        self.changed.emit(&LineItemsChanged { role: self.role });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use artstop_core::Price;

    use super::*;
    use crate::kv::MemoryStore;

    fn product(id: i32, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            category: "gifts".to_string(),
            collection: None,
            price: Price::new(price),
            old_price: None,
            variants: Vec::new(),
            colors: Vec::new(),
            images: vec![format!("https://example.com/{id}.jpg")],
            rating: 4.5,
            review_count: 3,
            description: String::new(),
            features: Vec::new(),
            in_stock: true,
            featured: false,
        }
    }

    fn cart() -> LineItemStore<MemoryStore> {
        LineItemStore::new(MemoryStore::new(), Role::Cart)
    }

    fn wishlist() -> LineItemStore<MemoryStore> {
        LineItemStore::new(MemoryStore::new(), Role::Wishlist)
    }

    #[test]
    fn test_cart_add_merges_matching_identity() {
        let store = cart();
        let p = product(7, 100);
        store.add(&p, &Selector::none(), 1).unwrap();
        store.add(&p, &Selector::none(), 1).unwrap();

        let items = store.read_all();
        assert_eq!(items.len(), 1);
        assert_eq!(items.first().map(|i| i.quantity), Some(2));
        assert_eq!(store.total_quantity(), 2);
    }

    #[test]
    fn test_cart_distinct_selectors_are_distinct_lines() {
        let store = cart();
        let p = product(7, 100);
        store.add(&p, &Selector::none(), 1).unwrap();
        store
            .add(
                &p,
                &Selector {
                    variant: None,
                    color: Some("Gold".to_string()),
                },
                1,
            )
            .unwrap();
        assert_eq!(store.read_all().len(), 2);
    }

    #[test]
    fn test_wishlist_duplicate_add_is_noop() {
        let store = wishlist();
        let p = product(3, 500);
        let notifications = Arc::new(AtomicUsize::new(0));
        let n = Arc::clone(&notifications);
        store.subscribe(move |_| {
            n.fetch_add(1, Ordering::SeqCst);
        });

        store.add(&p, &Selector::none(), 1).unwrap();
        store.add(&p, &Selector::none(), 5).unwrap();

        let items = store.read_all();
        assert_eq!(items.len(), 1);
        assert_eq!(items.first().map(|i| i.quantity), Some(1));
        // The duplicate add neither persisted nor notified.
        assert_eq!(notifications.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let store = wishlist();
        store.remove(ProductId::new(9), None).unwrap();
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn test_remove_matches_cart_identity() {
        let store = cart();
        let p = product(7, 100);
        let gold = Selector {
            variant: None,
            color: Some("Gold".to_string()),
        };
        store.add(&p, &Selector::none(), 1).unwrap();
        store.add(&p, &gold, 1).unwrap();

        store.remove(p.id, Some(&gold)).unwrap();
        let items = store.read_all();
        assert_eq!(items.len(), 1);
        assert_eq!(items.first().and_then(|i| i.color.clone()), None);
    }

    #[test]
    fn test_replace_all_roundtrip_preserves_order() {
        let store = cart();
        let items: Vec<LineItem> = [3, 1, 2]
            .iter()
            .map(|id| LineItem::from_product(&product(*id, 100), &Selector::none(), 1))
            .collect();
        store.replace_all(items.clone()).unwrap();
        assert_eq!(store.read_all(), items);
    }

    #[test]
    fn test_corrupt_persisted_cart_reads_empty() {
        let kv = MemoryStore::new();
        kv.set(Role::Cart.key(), "[{not valid").unwrap();
        let store = LineItemStore::new(kv, Role::Cart);
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn test_move_to_cart() {
        let kv = MemoryStore::new();
        let wishlist = LineItemStore::new(kv.clone(), Role::Wishlist);
        let cart = LineItemStore::new(kv, Role::Cart);
        let p = product(4, 3200);

        wishlist.add(&p, &Selector::none(), 1).unwrap();
        wishlist.move_to_cart(&cart, p.id).unwrap();

        assert!(wishlist.read_all().is_empty());
        let cart_items = cart.read_all();
        assert_eq!(cart_items.len(), 1);
        assert_eq!(cart_items.first().map(|i| i.id), Some(p.id));

        // Moving an id that is no longer wishlisted is a no-op.
        wishlist.move_to_cart(&cart, p.id).unwrap();
        assert_eq!(cart.read_all().len(), 1);
    }

    #[test]
    fn test_move_to_cart_role_checks() {
        let kv = MemoryStore::new();
        let cart_a = LineItemStore::new(kv.clone(), Role::Cart);
        let cart_b = LineItemStore::new(kv, Role::Cart);
        assert!(matches!(
            cart_a.move_to_cart(&cart_b, ProductId::new(1)),
            Err(StoreError::RoleMismatch { .. })
        ));
    }

    #[test]
    fn test_clear_notifies() {
        let store = cart();
        let notifications = Arc::new(AtomicUsize::new(0));
        let n = Arc::clone(&notifications);
        store.subscribe(move |event| {
            assert_eq!(event.role, Role::Cart);
            n.fetch_add(1, Ordering::SeqCst);
        });
        store.clear().unwrap();
        assert_eq!(notifications.load(Ordering::SeqCst), 1);
    }
}
