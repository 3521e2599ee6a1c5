//! Service facades over the insight engine.
//!
//! Each call takes a fresh snapshot from the injected `CatalogReader`, runs the
//! engine inline (it does no IO) and stamps the result with `generated_at`.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use stockpulse_ai::{Insight, InsightAggregator, InsightBatch, StockLevel, Summary};
use stockpulse_products::Product;
use stockpulse_sales::Sale;

use crate::catalog::CatalogReader;
use crate::error::StoreError;

/// Insights for every product plus the fleet summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    pub insights: Vec<Insight>,
    pub summary: Summary,
    pub generated_at: DateTime<Utc>,
}

/// Flattened stock view for every product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockReport {
    pub products: Vec<StockLevel>,
    pub generated_at: DateTime<Utc>,
}

/// Report facade over a catalog reader.
///
/// Each call takes a fresh snapshot of products and sales and runs the
/// aggregator over it; nothing is cached between calls.
pub struct InsightService<R> {
    reader: R,
    aggregator: InsightAggregator,
}

impl<R> InsightService<R>
where
    R: CatalogReader,
{
    pub fn new(reader: R) -> Self {
        Self::with_aggregator(reader, InsightAggregator::default())
    }

    pub fn with_aggregator(reader: R, aggregator: InsightAggregator) -> Self {
        Self { reader, aggregator }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub async fn insights(&self) -> Result<InsightReport, StoreError> {
        let started = Instant::now();
        let batch = self.run("insights").await?;
        let InsightBatch { insights, summary } = batch;

        info!(
            products = summary.total_products,
            low_stock = summary.low_stock_count,
            urgent = summary.urgent_actions,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "generated insights"
        );

        Ok(InsightReport {
            insights,
            summary,
            generated_at: Utc::now(),
        })
    }

    pub async fn stock_levels(&self) -> Result<StockReport, StoreError> {
        let started = Instant::now();
        let batch = self.run("stock_levels").await?;
        let products: Vec<StockLevel> = batch.insights.iter().map(StockLevel::from).collect();

        info!(
            products = products.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "generated stock levels"
        );

        Ok(StockReport {
            products,
            generated_at: Utc::now(),
        })
    }

    async fn run(&self, view: &'static str) -> Result<InsightBatch, StoreError> {
        let (products, sales) = self.snapshot().await.inspect_err(|e| {
            warn!(view, error = %e, "failed to read catalog snapshot");
        })?;
        Ok(self.aggregator.aggregate(&products, &sales))
    }

    async fn snapshot(&self) -> Result<(Vec<Product>, Vec<Sale>), StoreError> {
        let products = self.reader.list_products().await?;
        let sales = self.reader.list_sales().await?;
        Ok((products, sales))
    }
}
