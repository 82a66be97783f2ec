//! Order records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::id::{OrderId, ProductId};
use super::price::Price;

/// Order fulfillment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    Delivered,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Processing => write!(f, "processing"),
            Self::Shipped => write!(f, "shipped"),
            Self::Delivered => write!(f, "delivered"),
        }
    }
}

/// A purchased product snapshot within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
    pub image: String,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub total: Price,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Sum of line totals across the order's items.
    #[must_use]
    pub fn items_total(&self) -> Price {
        self.items.iter().fold(Price::default(), |acc, item| {
            acc.saturating_add(item.price.saturating_mul_quantity(item.quantity))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Delivered).unwrap(),
            "\"delivered\""
        );
        let status: OrderStatus = serde_json::from_str("\"shipped\"").unwrap();
        assert_eq!(status, OrderStatus::Shipped);
    }

    #[test]
    fn test_order_roundtrip() {
        let order = Order {
            id: OrderId::from("ORD-002"),
            date: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
            status: OrderStatus::Processing,
            total: Price::new(7000),
            items: vec![OrderItem {
                id: ProductId::new(2),
                name: "Asma ul Husna Wall Art".to_string(),
                price: Price::new(7000),
                quantity: 1,
                image: "https://example.com/asma.jpg".to_string(),
            }],
        };
        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order);
        assert_eq!(order.items_total(), Price::new(7000));
    }
}
