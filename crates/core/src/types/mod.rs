//! Core types for ArtStop.
//!
//! This module provides the catalog and storefront domain model.

pub mod category;
pub mod id;
pub mod line_item;
pub mod order;
pub mod price;
pub mod product;

pub use category::Category;
pub use id::*;
pub use line_item::{LineItem, Selector};
pub use order::{Order, OrderItem, OrderStatus};
pub use price::Price;
pub use product::{Product, ProductError, Variant};
