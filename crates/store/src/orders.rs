//! Order history store.
//!
//! Orders are read-mostly: the storefront renders the history and appends
//! a record when a (mock) checkout completes. Reads fall back to the seed
//! dataset so a fresh profile still has a believable history to render.

use artstop_core::{Order, OrderId};

use crate::kv::{KeyValue, StoreError, read_json, write_json};
use crate::seed;

const ORDERS_KEY: &str = "artstop_orders";

/// The persisted order history.
#[derive(Clone)]
pub struct OrdersStore<S> {
    kv: S,
}

impl<S: KeyValue> OrdersStore<S> {
    pub const fn new(kv: S) -> Self {
        Self { kv }
    }

    /// All orders; seed history when nothing usable is persisted.
    #[must_use]
    pub fn read_all(&self) -> Vec<Order> {
        read_json(&self.kv, ORDERS_KEY).unwrap_or_else(seed::orders)
    }

    /// Look up one order.
    #[must_use]
    pub fn order(&self, id: &OrderId) -> Option<Order> {
        self.read_all().into_iter().find(|o| &o.id == id)
    }

    /// Append a new order to the history.
    ///
    /// # Errors
    ///
    /// Propagates persistence failures from the key-value surface.
    pub fn record(&self, order: Order) -> Result<(), StoreError> {
        let mut orders = self.read_all();
        orders.push(order);
        write_json(&self.kv, ORDERS_KEY, &orders)
    }
}
