//! The catalog query engine.

use std::cmp::Reverse;

use tracing::debug;

use artstop_core::Product;

use crate::params::{QueryError, QueryParams, SortBy};

/// One page of query results.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Products on the requested page, in final sort order.
    pub items: Vec<Product>,
    /// Total products matching the filters, across all pages.
    pub total_count: usize,
    /// `ceil(total_count / page_size)`; zero when nothing matched.
    pub total_pages: usize,
}

impl Page {
    /// Whether the filtered result set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

/// Run a catalog query: filter, sort, paginate.
///
/// Filters are pure predicates applied as an unordered conjunction, then
/// exactly one stable sort is applied, then the 1-indexed page is sliced
/// out. The input sequence is never mutated. A page beyond the last yields
/// empty `items`, not an error.
///
/// # Errors
///
/// [`QueryError::InvalidPageSize`] when `page_size` is zero and
/// [`QueryError::InvalidPage`] when `page` is zero; both are caller errors.
pub fn query(products: &[Product], params: &QueryParams) -> Result<Page, QueryError> {
    if params.page_size == 0 {
        return Err(QueryError::InvalidPageSize);
    }
    if params.page == 0 {
        return Err(QueryError::InvalidPage);
    }

    let mut filtered: Vec<&Product> = products
        .iter()
        .filter(|product| matches_filters(product, params))
        .collect();

    sort_products(&mut filtered, params.sort_by);

    let total_count = filtered.len();
    let total_pages = total_count.div_ceil(params.page_size);
    let start = (params.page - 1).saturating_mul(params.page_size);

    let items: Vec<Product> = filtered
        .into_iter()
        .skip(start)
        .take(params.page_size)
        .cloned()
        .collect();

    debug!(
        total = total_count,
        page = params.page,
        returned = items.len(),
        "catalog query"
    );

    Ok(Page {
        items,
        total_count,
        total_pages,
    })
}

/// Conjunction of all active filters.
fn matches_filters(product: &Product, params: &QueryParams) -> bool {
    if let Some(category) = params.category.as_deref()
        && product.category != category
    {
        return false;
    }

    // Sidebar selection composes with the route category by intersection;
    // an empty selection disables this filter.
    if !params.selected_categories.is_empty()
        && !params.selected_categories.contains(&product.category)
    {
        return false;
    }

    if let Some(search) = params.search.as_deref() {
        let needle = search.trim().to_lowercase();
        if !needle.is_empty()
            && !product.name.to_lowercase().contains(&needle)
            && !product.description.to_lowercase().contains(&needle)
        {
            return false;
        }
    }

    params.price_range.contains(product.price)
}

/// Apply the single active sort. All sorts are stable.
fn sort_products(products: &mut [&Product], sort_by: SortBy) {
    match sort_by {
        // Stable partition: featured first, input order kept within each half.
        SortBy::Featured => products.sort_by_key(|p| !p.featured),
        SortBy::Newest => products.sort_by_key(|p| Reverse(p.id)),
        SortBy::PriceLow => products.sort_by_key(|p| p.price),
        SortBy::PriceHigh => products.sort_by_key(|p| Reverse(p.price)),
        SortBy::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}

/// Search-box suggestions: case-insensitive substring match on product name
/// or category slug, capped at `limit`.
///
/// Queries shorter than two characters yield nothing (the storefront shows
/// popular searches instead).
#[must_use]
pub fn suggest<'a>(products: &'a [Product], query: &str, limit: usize) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.chars().count() < 2 {
        return Vec::new();
    }
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.category.to_lowercase().contains(&needle)
        })
        .take(limit)
        .collect()
}
