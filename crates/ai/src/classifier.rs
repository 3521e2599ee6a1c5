//! Stock-health classification from days of remaining stock.
//!
//! The threshold ladder lives here once and is shared by the insight and the
//! stock-level views. Thresholds apply in order, first match wins:
//!
//! | days of stock | band | status |
//! |---|---|---|
//! | `< 7` | `Critical` | Low Stock |
//! | `< 14` | `Watch` | In Stock |
//! | `> 30` | `Excess` | High Stock |
//! | otherwise | `Healthy` | In Stock |

use serde::{Deserialize, Serialize};

use stockpulse_products::StockStatus;

const CRITICAL_BELOW: f64 = 7.0;
const WATCH_BELOW: f64 = 14.0;
const EXCESS_ABOVE: f64 = 30.0;

/// Position of a product on the threshold ladder.
///
/// `Watch` and `Healthy` both report as In Stock but carry different guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockBand {
    Critical,
    Watch,
    Healthy,
    Excess,
}

impl StockBand {
    pub fn for_days(days_of_stock: f64) -> Self {
        if days_of_stock < CRITICAL_BELOW {
            StockBand::Critical
        } else if days_of_stock < WATCH_BELOW {
            StockBand::Watch
        } else if days_of_stock > EXCESS_ABOVE {
            StockBand::Excess
        } else {
            StockBand::Healthy
        }
    }

    pub fn status(self) -> StockStatus {
        match self {
            StockBand::Critical => StockStatus::LowStock,
            StockBand::Watch | StockBand::Healthy => StockStatus::InStock,
            StockBand::Excess => StockStatus::HighStock,
        }
    }
}

/// Derive a stock status from days of stock. Never yields `OutOfStock`.
pub fn classify(days_of_stock: f64) -> StockStatus {
    StockBand::for_days(days_of_stock).status()
}

/// Unrounded runway in days: `stock / max(predicted_demand, 1)`.
///
/// The guard keeps zero-demand products finite, which understates the true
/// runway of dead stock.
pub fn runway_days(stock: u64, predicted_demand: u64) -> f64 {
    stock as f64 / predicted_demand.max(1) as f64
}

/// Runway rounded to whole days, as reported on insights.
pub fn days_of_stock(stock: u64, predicted_demand: u64) -> u64 {
    runway_days(stock, predicted_demand).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_boundaries() {
        assert_eq!(classify(6.9), StockStatus::LowStock);
        assert_eq!(classify(7.0), StockStatus::InStock);
        assert_eq!(classify(13.9), StockStatus::InStock);
        assert_eq!(classify(14.0), StockStatus::InStock);
        assert_eq!(classify(30.0), StockStatus::InStock);
        assert_eq!(classify(30.1), StockStatus::HighStock);
    }

    #[test]
    fn bands_split_the_in_stock_range() {
        assert_eq!(StockBand::for_days(13.0), StockBand::Watch);
        assert_eq!(StockBand::for_days(14.0), StockBand::Healthy);
        assert_eq!(StockBand::for_days(30.0), StockBand::Healthy);
        assert_eq!(StockBand::for_days(0.0), StockBand::Critical);
    }

    #[test]
    fn zero_demand_uses_guard() {
        assert_eq!(days_of_stock(100, 0), 100);
        assert_eq!(classify(days_of_stock(100, 0) as f64), StockStatus::HighStock);
    }

    #[test]
    fn days_of_stock_rounds_half_up() {
        assert_eq!(days_of_stock(69, 10), 7);
        assert_eq!(days_of_stock(64, 10), 6);
        assert_eq!(days_of_stock(0, 5), 0);
    }
}
