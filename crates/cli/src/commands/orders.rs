//! Order history subcommand.

use artstop_store::{KeyValue, OrdersStore};

/// Print the order history.
pub fn list<S: KeyValue + Clone>(kv: &S) {
    let orders = OrdersStore::new(kv.clone()).read_all();
    for order in &orders {
        println!(
            "{}  {}  {}  total {}",
            order.id, order.date, order.status, order.total
        );
        for item in &order.items {
            println!("    [{}] {}  x{}  {}", item.id, item.name, item.quantity, item.price);
        }
    }
}
