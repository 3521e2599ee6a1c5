//! Shared builders for engine tests.

use chrono::{DateTime, Duration, TimeZone, Utc};

use stockpulse_core::{ProductId, SaleId};
use stockpulse_products::Product;
use stockpulse_sales::Sale;

pub fn day(n: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(n)
}

pub fn product(id: &str, name: &str, stock: u64) -> Product {
    Product::new(ProductId::new(id).unwrap(), name, stock).unwrap()
}

pub fn sale(id: usize, product_id: &str, quantity: u64, on_day: i64) -> Sale {
    Sale::new(
        SaleId::new(format!("{product_id}-s{id}")).unwrap(),
        ProductId::new(product_id).unwrap(),
        quantity,
        day(on_day),
        quantity as f64 * 2.5,
    )
    .unwrap()
}

/// One sale per day (day 0, 1, 2, ...) with the given quantities.
pub fn history(product_id: &str, quantities: &[u64]) -> Vec<Sale> {
    quantities
        .iter()
        .enumerate()
        .map(|(i, q)| sale(i, product_id, *q, i as i64))
        .collect()
}

pub fn refs(sales: &[Sale]) -> Vec<&Sale> {
    sales.iter().collect()
}
