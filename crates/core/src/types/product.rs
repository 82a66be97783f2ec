//! Product and variant records.
//!
//! Products are validated at construction time rather than trusting
//! arbitrary shapes from persisted data or admin input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::ProductId;
use super::price::Price;

/// Validation failures for [`Product`] records.
#[derive(Debug, Error, PartialEq)]
pub enum ProductError {
    /// Every product needs at least one image (the first is the thumbnail).
    #[error("product {0} has no images")]
    NoImages(ProductId),

    /// `old_price` signals a discount and must exceed the current price.
    #[error("product {0} has old_price <= price")]
    OldPriceNotGreater(ProductId),

    /// Variant `value`s identify a configuration and must be unique.
    #[error("product {0} has duplicate variant value `{1}`")]
    DuplicateVariant(ProductId, String),

    /// Ratings are on a 0-5 scale.
    #[error("product {0} has rating {1} outside [0, 5]")]
    RatingOutOfRange(ProductId, f32),
}

/// A named, priced configuration option of a product (e.g., a size).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Display name (e.g., "Small", "16x20").
    pub name: String,
    /// Stable selector value, unique within the product.
    pub value: String,
    /// Price for this configuration.
    pub price: Price,
    /// Physical dimensions, when applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable identifier, assigned at creation and never reused.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category slug this product belongs to.
    pub category: String,
    /// Optional collection label grouping products within the category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    /// Base price; authoritative when `variants` is empty, display fallback
    /// otherwise.
    pub price: Price,
    /// Pre-discount price, strictly greater than `price` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<Price>,
    /// Ordered configuration options; empty means no size/option variation.
    #[serde(default)]
    pub variants: Vec<Variant>,
    /// Available colors (display strings, no price delta).
    #[serde(default)]
    pub colors: Vec<String>,
    /// Image references; the first is the primary/thumbnail image.
    pub images: Vec<String>,
    /// Average review rating in [0, 5].
    pub rating: f32,
    /// Number of reviews behind `rating`.
    pub review_count: u32,
    /// Long-form description, searched by the catalog query engine.
    #[serde(default)]
    pub description: String,
    /// Bullet-point feature list.
    #[serde(default)]
    pub features: Vec<String>,
    pub in_stock: bool,
    pub featured: bool,
}

impl Product {
    /// Check the record-level invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: empty `images`, a non-discount
    /// `old_price`, a duplicate variant `value`, or an out-of-range rating.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.images.is_empty() {
            return Err(ProductError::NoImages(self.id));
        }
        if let Some(old_price) = self.old_price
            && old_price <= self.price
        {
            return Err(ProductError::OldPriceNotGreater(self.id));
        }
        let mut seen = std::collections::HashSet::new();
        for variant in &self.variants {
            if !seen.insert(variant.value.as_str()) {
                return Err(ProductError::DuplicateVariant(
                    self.id,
                    variant.value.clone(),
                ));
            }
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(ProductError::RatingOutOfRange(self.id, self.rating));
        }
        Ok(())
    }

    /// Price to show on listings: the lowest variant price when variants
    /// exist, otherwise the base price.
    #[must_use]
    pub fn display_price(&self) -> Price {
        self.variants
            .iter()
            .map(|v| v.price)
            .min()
            .unwrap_or(self.price)
    }

    /// Primary/thumbnail image reference.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Look up a variant by its selector value.
    #[must_use]
    pub fn variant(&self, value: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.value == value)
    }
}
