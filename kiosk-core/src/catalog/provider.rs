//! Collaborator traits for catalog and settings reads
//!
//! Production deployments back these with the hosted store; tests and
//! the demo use the in-memory implementations.

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::{AppSettings, Product};
use shared::KioskResult;

/// Read access to the product catalog
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch_products(&self) -> KioskResult<Vec<Product>>;
}

/// Read access to store-wide settings
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    async fn fetch_settings(&self) -> KioskResult<AppSettings>;
}

/// In-memory catalog for tests and demos
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    products: RwLock<Vec<Product>>,
}

impl MemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    pub fn set_products(&self, products: Vec<Product>) {
        *self.products.write() = products;
    }
}

#[async_trait]
impl CatalogProvider for MemoryCatalog {
    async fn fetch_products(&self) -> KioskResult<Vec<Product>> {
        Ok(self.products.read().clone())
    }
}

/// In-memory settings for tests and demos
#[derive(Debug, Default)]
pub struct MemorySettings {
    settings: RwLock<AppSettings>,
}

impl MemorySettings {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }

    pub fn set_settings(&self, settings: AppSettings) {
        *self.settings.write() = settings;
    }
}

#[async_trait]
impl SettingsProvider for MemorySettings {
    async fn fetch_settings(&self) -> KioskResult<AppSettings> {
        Ok(self.settings.read().clone())
    }
}
