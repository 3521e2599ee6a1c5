//! Narrative guidance per product.

use serde::{Deserialize, Serialize};

use stockpulse_products::Product;

use crate::classifier::{StockBand, runway_days};

/// Severity tag attached to a recommendation.
///
/// Visual styling (colours, badges) is left to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Urgent,
    Warning,
    Info,
    Success,
}

impl From<StockBand> for Severity {
    fn from(band: StockBand) -> Self {
        match band {
            StockBand::Critical => Severity::Urgent,
            StockBand::Watch => Severity::Warning,
            StockBand::Excess => Severity::Info,
            StockBand::Healthy => Severity::Success,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub text: String,
    pub severity: Severity,
}

/// Guidance for `product` given its rounded predicted demand.
///
/// The ladder is applied to the unrounded runway; only the day count quoted in
/// the text is rounded.
pub fn recommend(product: &Product, predicted_demand: u64) -> Recommendation {
    let runway = runway_days(product.stock, predicted_demand);
    let band = StockBand::for_days(runway);
    let days = runway.round() as u64;
    let name = &product.name;

    let text = match band {
        StockBand::Critical => format!(
            "Increase production of {name}. Current stock will last only {days} days."
        ),
        StockBand::Watch => {
            format!("Monitor {name} closely. Stock levels adequate for {days} days.")
        }
        StockBand::Excess => format!(
            "Consider reducing production of {name}. High inventory levels detected."
        ),
        StockBand::Healthy => {
            format!("{name} stock levels are optimal. Continue current production schedule.")
        }
    };

    Recommendation {
        text,
        severity: band.into(),
    }
}
