use serde::{Deserialize, Serialize};

use stockpulse_core::{DomainError, DomainResult, ProductId};

/// Stock-health status of a product.
///
/// `OutOfStock` is only ever supplied by the store on the product record; the
/// classifier derives the other three from days of stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "Out of Stock")]
    OutOfStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "High Stock")]
    HighStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
            StockStatus::HighStock => "High Stock",
        }
    }

    /// Whether this status counts towards the summary's low-stock tally.
    pub fn is_low(&self) -> bool {
        matches!(self, StockStatus::OutOfStock | StockStatus::LowStock)
    }
}

impl core::str::FromStr for StockStatus {
    type Err = DomainError;

    /// Parse the display label used by the store (`"Out of Stock"`, ...).
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim() {
            "Out of Stock" => Ok(StockStatus::OutOfStock),
            "Low Stock" => Ok(StockStatus::LowStock),
            "In Stock" => Ok(StockStatus::InStock),
            "High Stock" => Ok(StockStatus::HighStock),
            other => Err(DomainError::validation(format!(
                "unknown stock status label: {other:?}"
            ))),
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog product with its current on-hand stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub stock: u64,
    /// Status carried by the store, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StockStatus>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, stock: u64) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name must not be empty"));
        }
        Ok(Self {
            id,
            name,
            stock,
            status: None,
        })
    }

    pub fn with_status(mut self, status: StockStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// True when the store has flagged this product as out of stock.
    pub fn is_marked_out_of_stock(&self) -> bool {
        self.status == Some(StockStatus::OutOfStock)
    }
}
