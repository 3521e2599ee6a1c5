//! `stockpulse-ai`
//!
//! **Responsibility:** the forecasting & recommendation engine.
//!
//! This crate is intentionally pure:
//! - It never fetches products or sales itself; callers pass snapshots in.
//! - It never mutates its inputs and keeps no state between calls.
//! - It emits plain data (insights + summary), not presentation.

pub mod aggregator;
pub mod classifier;
pub mod confidence;
pub mod error;
pub mod forecast;
pub mod recommendation;

#[cfg(test)]
mod fixtures;

pub use aggregator::{
    ForecastConfig, Insight, InsightAggregator, InsightBatch, StockLevel, Summary, aggregate,
};
pub use classifier::{StockBand, classify, days_of_stock, runway_days};
pub use confidence::{confidence, confidence_for_samples};
pub use error::AiError;
pub use forecast::{DEFAULT_WINDOW, forecast};
pub use recommendation::{Recommendation, Severity, recommend};
