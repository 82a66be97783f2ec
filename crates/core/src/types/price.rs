//! Type-safe price representation.
//!
//! Catalog prices are whole numbers in the store's smallest display unit;
//! the model is deliberately currency-agnostic (the storefront renders the
//! currency symbol, not this crate).

use serde::{Deserialize, Serialize};

/// A whole-number price amount.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a new price from a whole-number amount.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the underlying amount.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Saturating addition, used when summing line totals.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Multiply by a quantity, saturating on overflow.
    #[must_use]
    pub const fn saturating_mul_quantity(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as i64))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_ordering() {
        assert!(Price::new(3000) < Price::new(8000));
        assert_eq!(Price::new(5000), Price::from(5000));
    }

    #[test]
    fn test_line_total() {
        let total = Price::new(4500).saturating_mul_quantity(3);
        assert_eq!(total.amount(), 13_500);
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Price::new(8000)).unwrap();
        assert_eq!(json, "8000");
    }
}
