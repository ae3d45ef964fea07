//! Immutable catalog snapshot

use shared::models::{Product, ProductId};
use std::collections::HashMap;

/// Point-in-time view of the catalog with id and category lookups
///
/// Built from a provider fetch; cheap to clone around a session. Catalog
/// lookups may race with availability edits, so consumers treat missing
/// ids as zero-contribution rather than errors.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    by_id: HashMap<ProductId, Product>,
    categories: Vec<String>,
}

impl CatalogIndex {
    pub fn new(products: Vec<Product>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for product in &products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        let by_id = products.into_iter().map(|p| (p.id, p)).collect();
        Self { by_id, categories }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.by_id.get(&id)
    }

    /// Category names in first-seen order; the kiosk reorders them by
    /// the configured `category_order`.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn category_products(&self, category: &str) -> Vec<&Product> {
        let mut products: Vec<&Product> = self
            .by_id
            .values()
            .filter(|p| p.category == category)
            .collect();
        products.sort_by_key(|p| p.id);
        products
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }
}
