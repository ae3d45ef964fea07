//! Catalog Service - product caching with graceful degradation
//!
//! An unreachable catalog never crashes the kiosk: the service degrades
//! to an empty index ("no items available") and lets the flow continue.

use super::index::CatalogIndex;
use super::provider::CatalogProvider;
use parking_lot::RwLock;
use shared::models::{Product, ProductId};
use shared::KioskResult;
use std::collections::HashMap;
use std::sync::Arc;

/// Cached read path over a [`CatalogProvider`]
#[derive(Clone)]
pub struct CatalogService {
    provider: Arc<dyn CatalogProvider>,
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("cached_products", &self.products.read().len())
            .finish()
    }
}

impl CatalogService {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self {
            provider,
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Refresh the cache from the provider; returns the product count.
    pub async fn refresh(&self) -> KioskResult<usize> {
        let products = self.provider.fetch_products().await?;
        let count = products.len();
        *self.products.write() = products.into_iter().map(|p| (p.id, p)).collect();
        tracing::debug!(count, "Catalog cache refreshed");
        Ok(count)
    }

    /// Snapshot of the current cache contents
    pub fn index(&self) -> CatalogIndex {
        CatalogIndex::new(self.products.read().values().cloned().collect())
    }

    /// Refresh and snapshot in one step, degrading to an empty catalog
    /// when the provider is unreachable.
    pub async fn load(&self) -> CatalogIndex {
        match self.refresh().await {
            Ok(_) => self.index(),
            Err(e) => {
                tracing::warn!(error = %e, "Catalog unavailable, serving no items");
                CatalogIndex::empty()
            }
        }
    }
}
