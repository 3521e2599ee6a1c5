use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockpulse_core::{DomainError, DomainResult, ProductId, SaleId};

/// A single sale of one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: SaleId,
    pub product_id: ProductId,
    pub quantity: u64,
    pub date: DateTime<Utc>,
    pub revenue: f64,
}

impl Sale {
    pub fn new(
        id: SaleId,
        product_id: ProductId,
        quantity: u64,
        date: DateTime<Utc>,
        revenue: f64,
    ) -> DomainResult<Self> {
        if !(revenue.is_finite() && revenue >= 0.0) {
            return Err(DomainError::validation(format!(
                "sale {id}: revenue must be a finite non-negative amount (got {revenue})"
            )));
        }
        Ok(Self {
            id,
            product_id,
            quantity,
            date,
            revenue,
        })
    }
}
