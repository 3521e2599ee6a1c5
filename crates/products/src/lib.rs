//! Products domain module.
//!
//! Catalog records as read from the external store. The forecasting engine treats
//! them as read-only input (no IO, no HTTP, no storage here).

pub mod product;

pub use product::{Product, StockStatus};
