//! Infrastructure layer: catalog storage adapters, service facades, config.

pub mod catalog;
pub mod config;
pub mod error;
pub mod service;

pub use catalog::{CatalogReader, CatalogSeed, InMemoryCatalog, PostgresCatalog};
pub use config::{AppConfig, ConfigError};
pub use error::StoreError;
pub use service::{InsightReport, InsightService, StockReport};
