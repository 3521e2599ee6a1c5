//! Per-product insights and the fleet-wide summary.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use stockpulse_core::ProductId;
use stockpulse_products::{Product, StockStatus};
use stockpulse_sales::Sale;

use crate::classifier::{classify, days_of_stock};
use crate::confidence::confidence;
use crate::error::AiError;
use crate::forecast::{DEFAULT_WINDOW, forecast};
use crate::recommendation::{Severity, recommend};

/// Tunables for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Number of most recent sales averaged into the demand forecast.
    pub window: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}

impl ForecastConfig {
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn validate(&self) -> Result<(), AiError> {
        if self.window == 0 {
            return Err(AiError::InvalidConfig(
                "forecast window must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Engine output for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub product_id: ProductId,
    pub product_name: String,
    pub current_stock: u64,
    pub predicted_demand: u64,
    pub recommendation: String,
    pub recommendation_type: Severity,
    pub confidence: f64,
    pub days_of_stock: u64,
    /// Store-supplied `OutOfStock` if present, otherwise the classified status.
    pub status: StockStatus,
}

/// Fleet-wide rollup over a batch of insights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_products: usize,
    pub low_stock_count: usize,
    pub urgent_actions: usize,
    /// Mean insight confidence, kept unrounded and written out with two
    /// decimals. Absent when there are no products.
    #[serde(with = "two_decimal_text")]
    pub avg_confidence: Option<f64>,
}

impl Summary {
    pub fn from_insights(insights: &[Insight]) -> Self {
        let avg_confidence = if insights.is_empty() {
            None
        } else {
            let total: f64 = insights.iter().map(|i| i.confidence).sum();
            Some(total / insights.len() as f64)
        };

        Self {
            total_products: insights.len(),
            low_stock_count: insights.iter().filter(|i| i.status.is_low()).count(),
            urgent_actions: insights
                .iter()
                .filter(|i| i.recommendation_type == Severity::Urgent)
                .count(),
            avg_confidence,
        }
    }
}

/// Insights for every product plus their summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightBatch {
    pub insights: Vec<Insight>,
    pub summary: Summary,
}

/// Flattened per-product stock view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLevel {
    pub id: ProductId,
    pub name: String,
    pub stock: u64,
    pub predicted_demand: u64,
    pub days_of_stock: u64,
    pub status: StockStatus,
    pub confidence: f64,
}

impl From<&Insight> for StockLevel {
    fn from(insight: &Insight) -> Self {
        Self {
            id: insight.product_id.clone(),
            name: insight.product_name.clone(),
            stock: insight.current_stock,
            predicted_demand: insight.predicted_demand,
            days_of_stock: insight.days_of_stock,
            status: insight.status,
            confidence: insight.confidence,
        }
    }
}

/// Runs the forecast → confidence → recommendation pipeline per product.
///
/// Stateless: every call works on its own input snapshot, so a single instance
/// can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsightAggregator {
    config: ForecastConfig,
}

impl InsightAggregator {
    pub fn new(config: ForecastConfig) -> Result<Self, AiError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> ForecastConfig {
        self.config
    }

    /// Build one insight per product, in input order, and summarise them.
    ///
    /// Sales are matched to products by `product_id`; products without sales
    /// get an empty history and sales for unknown products are ignored.
    pub fn aggregate(&self, products: &[Product], sales: &[Sale]) -> InsightBatch {
        let mut by_product: HashMap<&ProductId, Vec<&Sale>> = HashMap::new();
        for sale in sales {
            by_product.entry(&sale.product_id).or_default().push(sale);
        }

        let insights: Vec<Insight> = products
            .iter()
            .map(|product| {
                let history = by_product
                    .get(&product.id)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                self.insight_for(product, history)
            })
            .collect();

        let summary = Summary::from_insights(&insights);

        debug!(
            products = products.len(),
            sales = sales.len(),
            low_stock = summary.low_stock_count,
            urgent = summary.urgent_actions,
            "aggregated stock insights"
        );

        InsightBatch { insights, summary }
    }

    fn insight_for(&self, product: &Product, history: &[&Sale]) -> Insight {
        let predicted_demand = forecast(history, self.config.window).round() as u64;
        let confidence = confidence(history);
        let days = days_of_stock(product.stock, predicted_demand);
        let recommendation = recommend(product, predicted_demand);

        let status = if product.is_marked_out_of_stock() {
            StockStatus::OutOfStock
        } else {
            classify(days as f64)
        };

        Insight {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            current_stock: product.stock,
            predicted_demand,
            recommendation: recommendation.text,
            recommendation_type: recommendation.severity,
            confidence,
            days_of_stock: days,
            status,
        }
    }
}

/// Aggregate with the default configuration (7-sale window).
pub fn aggregate(products: &[Product], sales: &[Sale]) -> InsightBatch {
    InsightAggregator::default().aggregate(products, sales)
}

/// Serialises `Option<f64>` as two-decimal text (`"0.82"`) or `null`.
///
/// The value is rounded exactly once, here.
mod two_decimal_text {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn serialize<S: Serializer>(value: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => s.serialize_str(&format!("{v:.2}")),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Option::<String>::deserialize(d)?
            .map(|text| text.parse::<f64>().map_err(D::Error::custom))
            .transpose()
    }
}
