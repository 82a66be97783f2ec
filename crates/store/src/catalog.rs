//! Persisted catalog snapshot with admin mutations.
//!
//! Categories and products live under two keys; reading falls back to the
//! compiled-in seed catalog when nothing is persisted (or the persisted
//! value is corrupt). Catalog mutations fire a single `catalogChanged`
//! signal carrying which sub-resource moved, so an admin dashboard can
//! refresh everything off one subscription.

use serde::{Deserialize, Serialize};

use artstop_core::{Category, Product, ProductId};

use crate::kv::{KeyValue, StoreError, read_json, write_json};
use crate::seed;
use crate::signal::{Signal, SubscriberId};

const CATEGORIES_KEY: &str = "artstop_categories";
const PRODUCTS_KEY: &str = "artstop_products";

/// Which catalog sub-resource a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogResource {
    Categories,
    Products,
}

/// Change notification payload for catalog mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogChanged {
    pub resource: CatalogResource,
}

/// A collection within a category, resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub name: String,
    pub slug: String,
    pub image: String,
    pub product_count: usize,
}

/// The persisted category/product catalog.
///
/// Clones share the same persistence surface and signal.
#[derive(Clone)]
pub struct CatalogStore<S> {
    kv: S,
    changed: Signal<CatalogChanged>,
}

impl<S: KeyValue> CatalogStore<S> {
    pub fn new(kv: S) -> Self {
        Self {
            kv,
            changed: Signal::new(),
        }
    }

    /// Subscribe to catalog mutations (both sub-resources).
    pub fn subscribe(
        &self,
        listener: impl Fn(&CatalogChanged) + Send + Sync + 'static,
    ) -> SubscriberId {
        self.changed.subscribe(listener)
    }

    /// Detach a previously subscribed listener.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        self.changed.unsubscribe(id)
    }

    /// All categories; seed catalog when nothing usable is persisted.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        read_json(&self.kv, CATEGORIES_KEY).unwrap_or_else(seed::categories)
    }

    /// All products; seed catalog when nothing usable is persisted.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        read_json(&self.kv, PRODUCTS_KEY).unwrap_or_else(seed::products)
    }

    /// Look up a category by slug.
    #[must_use]
    pub fn category_by_slug(&self, slug: &str) -> Option<Category> {
        self.categories().into_iter().find(|c| c.slug == slug)
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<Product> {
        self.products().into_iter().find(|p| p.id == id)
    }

    /// Wholesale category replacement (admin bulk edit).
    ///
    /// # Errors
    ///
    /// Propagates persistence failures from the key-value surface.
    pub fn replace_categories(&self, categories: Vec<Category>) -> Result<(), StoreError> {
        write_json(&self.kv, CATEGORIES_KEY, &categories)?;
        self.notify(CatalogResource::Categories);
        Ok(())
    }

    /// Wholesale product replacement (admin bulk edit).
    ///
    /// # Errors
    ///
    /// Propagates persistence failures from the key-value surface.
    pub fn replace_products(&self, products: Vec<Product>) -> Result<(), StoreError> {
        write_json(&self.kv, PRODUCTS_KEY, &products)?;
        self.notify(CatalogResource::Products);
        Ok(())
    }

    /// Insert a product, assigning the next free id (`max + 1`).
    ///
    /// The id on the passed record is ignored; the assigned id is returned.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidProduct`] when validation fails; otherwise
    /// persistence failures.
    pub fn insert_product(&self, mut product: Product) -> Result<ProductId, StoreError> {
        let mut products = self.products();
        let next_id = products
            .iter()
            .map(|p| p.id.as_i32())
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        product.id = ProductId::new(next_id);
        product.validate()?;
        products.push(product);
        write_json(&self.kv, PRODUCTS_KEY, &products)?;
        self.notify(CatalogResource::Products);
        Ok(ProductId::new(next_id))
    }

    /// Replace the product with the same id. Returns false (and does not
    /// persist) when no such product exists.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidProduct`] when validation fails; otherwise
    /// persistence failures.
    pub fn update_product(&self, product: Product) -> Result<bool, StoreError> {
        product.validate()?;
        let mut products = self.products();
        let Some(slot) = products.iter_mut().find(|p| p.id == product.id) else {
            return Ok(false);
        };
        *slot = product;
        write_json(&self.kv, PRODUCTS_KEY, &products)?;
        self.notify(CatalogResource::Products);
        Ok(true)
    }

    /// Remove a product by id. Absent ids are a no-op returning false.
    ///
    /// # Errors
    ///
    /// Propagates persistence failures from the key-value surface.
    pub fn remove_product(&self, id: ProductId) -> Result<bool, StoreError> {
        let mut products = self.products();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Ok(false);
        }
        write_json(&self.kv, PRODUCTS_KEY, &products)?;
        self.notify(CatalogResource::Products);
        Ok(true)
    }

    /// Add a named collection to a category, optionally with an image.
    ///
    /// Returns false (no persist, no signal) when the category is unknown
    /// or already has a collection with this name.
    ///
    /// # Errors
    ///
    /// Propagates persistence failures from the key-value surface.
    pub fn add_collection(
        &self,
        category_slug: &str,
        name: &str,
        image: Option<String>,
    ) -> Result<bool, StoreError> {
        let mut categories = self.categories();
        let Some(category) = categories.iter_mut().find(|c| c.slug == category_slug) else {
            return Ok(false);
        };
        if category.has_collection(name) {
            return Ok(false);
        }
        category.collections.push(name.to_string());
        if let Some(image) = image {
            category.collection_images.insert(name.to_string(), image);
        }
        write_json(&self.kv, CATEGORIES_KEY, &categories)?;
        self.notify(CatalogResource::Categories);
        Ok(true)
    }

    /// Collections of a category resolved for display: slugified handle,
    /// per-collection product count, and an image falling back to a
    /// generated placeholder when the category has no entry for it.
    #[must_use]
    pub fn collections_for_category(&self, category_slug: &str) -> Vec<CollectionSummary> {
        let Some(category) = self.category_by_slug(category_slug) else {
            return Vec::new();
        };
        let products = self.products();
        category
            .collections
            .iter()
            .map(|name| CollectionSummary {
                name: name.clone(),
                slug: slugify(name),
                image: category
                    .collection_images
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| placeholder_image(name)),
                product_count: products
                    .iter()
                    .filter(|p| {
                        p.category == category_slug && p.collection.as_deref() == Some(name)
                    })
                    .count(),
            })
            .collect()
    }

    fn notify(&self, resource: CatalogResource) {
        self.changed.emit(&CatalogChanged { resource });
    }
}

/// Turn a display name into a URL slug: lowercase, runs of non-alphanumeric
/// characters become single hyphens, no leading/trailing hyphen.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Deterministic placeholder image for collections without one.
#[must_use]
pub fn placeholder_image(name: &str) -> String {
    format!("https://picsum.photos/seed/{}/600/400", urlencoding::encode(name))
}
