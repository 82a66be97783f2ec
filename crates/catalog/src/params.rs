//! Query parameter types for the catalog engine.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use artstop_core::Price;

/// Page size used by the storefront product grid.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Structurally invalid query parameters.
///
/// These are caller errors and fail fast; the engine never silently
/// "fixes" them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Page size must be positive.
    #[error("page size must be positive")]
    InvalidPageSize,

    /// Pages are 1-indexed; page 0 does not exist.
    #[error("page numbers are 1-indexed")]
    InvalidPage,

    /// Price-range bucket did not parse as `all`, `min`, or `min-max`.
    #[error("malformed price range `{0}`")]
    InvalidPriceRange(String),
}

/// Inclusive price bucket filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceRange {
    /// No price filtering.
    #[default]
    All,
    /// `price >= min`, unbounded above.
    AtLeast(Price),
    /// `min <= price <= max`, inclusive on both bounds.
    Between(Price, Price),
}

impl PriceRange {
    /// Whether a price falls inside this bucket.
    #[must_use]
    pub fn contains(&self, price: Price) -> bool {
        match *self {
            Self::All => true,
            Self::AtLeast(min) => price >= min,
            Self::Between(min, max) => price >= min && price <= max,
        }
    }
}

impl FromStr for PriceRange {
    type Err = QueryError;

    /// Parse the storefront's bucket syntax: `all`, `min`, or `min-max`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        let malformed = || QueryError::InvalidPriceRange(s.to_string());
        match s.split_once('-') {
            None => {
                let min = s.parse::<i64>().map_err(|_| malformed())?;
                Ok(Self::AtLeast(Price::new(min)))
            }
            Some((min, max)) => {
                let min = min.trim().parse::<i64>().map_err(|_| malformed())?;
                let max = max.trim().parse::<i64>().map_err(|_| malformed())?;
                Ok(Self::Between(Price::new(min), Price::new(max)))
            }
        }
    }
}

/// Sort order for query results. Exactly one is active per query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Descending by product id.
    Newest,
    /// Ascending by base price.
    PriceLow,
    /// Descending by base price.
    PriceHigh,
    /// Descending by rating.
    Rating,
    /// Featured products first, input order preserved within each partition.
    /// Also the catch-all for unrecognized serialized values.
    #[default]
    #[serde(other)]
    Featured,
}

impl SortBy {
    /// Map a raw UI parameter to a sort order.
    ///
    /// Unrecognized values behave as [`SortBy::Featured`], matching the
    /// storefront's default sort dropdown state.
    #[must_use]
    pub fn from_param(param: &str) -> Self {
        match param {
            "newest" => Self::Newest,
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "rating" => Self::Rating,
            _ => Self::Featured,
        }
    }
}

/// Parameters for one catalog query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    /// Route-level category slug filter.
    pub category: Option<String>,
    /// Sidebar category selection; composes with `category` by intersection
    /// when non-empty.
    pub selected_categories: HashSet<String>,
    /// Case-insensitive free-text search over name and description.
    /// Empty or absent disables the filter.
    pub search: Option<String>,
    pub price_range: PriceRange,
    pub sort_by: SortBy,
    /// 1-indexed page number.
    pub page: usize,
    pub page_size: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            category: None,
            selected_categories: HashSet::new(),
            search: None,
            price_range: PriceRange::All,
            sort_by: SortBy::Featured,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
