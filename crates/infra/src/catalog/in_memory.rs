use std::path::Path;
use std::sync::RwLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use stockpulse_products::Product;
use stockpulse_sales::Sale;

use super::CatalogReader;
use crate::error::StoreError;

/// Catalog contents in the JSON shape used by seed files:
/// `{ "products": [...], "sales": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub sales: Vec<Sale>,
}

/// In-memory catalog for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    inner: RwLock<CatalogSeed>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: CatalogSeed) -> Self {
        Self {
            inner: RwLock::new(seed),
        }
    }

    /// Load a JSON seed file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Seed(format!("{}: {e}", path.display())))?;
        let seed: CatalogSeed = serde_json::from_str(&raw)
            .map_err(|e| StoreError::Seed(format!("{}: {e}", path.display())))?;
        Ok(Self::from_seed(seed))
    }

    /// Insert a product, replacing any existing product with the same id.
    pub fn upsert_product(&self, product: Product) -> Result<(), StoreError> {
        let mut seed = self.write()?;
        match seed.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => seed.products.push(product),
        }
        Ok(())
    }

    pub fn record_sale(&self, sale: Sale) -> Result<(), StoreError> {
        self.write()?.sales.push(sale);
        Ok(())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, CatalogSeed>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::Unavailable("in-memory catalog lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, CatalogSeed>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::Unavailable("in-memory catalog lock poisoned".to_string()))
    }
}

#[async_trait]
impl CatalogReader for InMemoryCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let mut products = self.read()?.products.clone();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn list_sales(&self) -> Result<Vec<Sale>, StoreError> {
        let mut sales = self.read()?.sales.clone();
        sales.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(sales)
    }
}
