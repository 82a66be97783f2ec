//! Catalog query subcommand.

use artstop_catalog::{QueryParams, SortBy, query};
use artstop_store::{CatalogStore, KeyValue};

/// Run a catalog query and print the resulting page.
///
/// # Errors
///
/// Returns an error for a malformed price range or invalid page/page-size.
pub fn run<S: KeyValue + Clone>(
    kv: &S,
    category: Option<String>,
    search: Option<String>,
    price_range: &str,
    sort: &str,
    page: usize,
    page_size: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = CatalogStore::new(kv.clone());
    let products = catalog.products();

    let params = QueryParams {
        category,
        search,
        price_range: price_range.parse()?,
        sort_by: SortBy::from_param(sort),
        page,
        page_size,
        ..QueryParams::default()
    };

    let result = query(&products, &params)?;

    println!(
        "{} products ({} page{}), showing page {}",
        result.total_count,
        result.total_pages,
        if result.total_pages == 1 { "" } else { "s" },
        params.page,
    );
    for product in &result.items {
        let marker = if product.featured { "*" } else { " " };
        println!(
            "{marker} [{}] {}  {}  ({}, rating {:.1})",
            product.id, product.name, product.price, product.category, product.rating,
        );
    }
    Ok(())
}
