//! Read-only catalog boundary (products + sales).
//!
//! The service only ever reads snapshots through `CatalogReader`; which backing
//! store is used is decided at wiring time.

pub mod in_memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

use stockpulse_products::Product;
use stockpulse_sales::Sale;

use crate::error::StoreError;

pub use in_memory::{CatalogSeed, InMemoryCatalog};
pub use postgres::PostgresCatalog;

/// Source of product and sale snapshots.
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// All products, ordered by name.
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    /// All sales, newest first.
    async fn list_sales(&self) -> Result<Vec<Sale>, StoreError>;
}

#[async_trait]
impl<R> CatalogReader for Arc<R>
where
    R: CatalogReader + ?Sized,
{
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        (**self).list_products().await
    }

    async fn list_sales(&self) -> Result<Vec<Sale>, StoreError> {
        (**self).list_sales().await
    }
}
