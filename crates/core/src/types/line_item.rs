//! Cart and wishlist line items.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;
use super::product::Product;

/// Which configuration of a product a line item refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selector {
    /// Variant `value`, when the product has variants.
    pub variant: Option<String>,
    /// Chosen color, when the product has colors.
    pub color: Option<String>,
}

impl Selector {
    /// Selector for a product with no variant/color choice.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            variant: None,
            color: None,
        }
    }
}

const fn default_quantity() -> u32 {
    1
}

/// One entry in a cart or wishlist.
///
/// Name, price, and image are a denormalized snapshot taken when the item
/// was added; they are not re-synced to later product edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product this line refers to.
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Positive count; meaningful for carts only (wishlist entries stay at 1).
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl LineItem {
    /// Snapshot a product into a new line item.
    ///
    /// The price recorded is the selected variant's price when the selector
    /// names one, otherwise the product's base price. The image is the
    /// product thumbnail.
    #[must_use]
    pub fn from_product(product: &Product, selector: &Selector, quantity: u32) -> Self {
        let price = selector
            .variant
            .as_deref()
            .and_then(|value| product.variant(value))
            .map_or(product.price, |v| v.price);
        Self {
            id: product.id,
            name: product.name.clone(),
            price,
            image: product.thumbnail().unwrap_or_default().to_string(),
            variant: selector.variant.clone(),
            color: selector.color.clone(),
            quantity: quantity.max(1),
        }
    }

    /// Cart identity: same product, same variant, same color (absent
    /// selectors must match absent selectors).
    #[must_use]
    pub fn matches_cart(&self, id: ProductId, selector: &Selector) -> bool {
        self.id == id && self.variant == selector.variant && self.color == selector.color
    }

    /// Wishlist identity: by product id alone.
    #[must_use]
    pub const fn matches_wishlist(&self, id: ProductId) -> bool {
        self.id.as_i32() == id.as_i32()
    }

    /// Line total (`price * quantity`).
    #[must_use]
    pub const fn line_total(&self) -> Price {
        self.price.saturating_mul_quantity(self.quantity)
    }
}
