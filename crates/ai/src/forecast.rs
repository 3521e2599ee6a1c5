//! Demand forecasting: bounded moving average over the most recent sales.

use stockpulse_sales::Sale;

/// Number of most recent sales averaged by default.
pub const DEFAULT_WINDOW: usize = 7;

/// Predicted demand per sale period for one product's history.
///
/// Model:
/// - Order the history by `date`, newest first (input order does not matter).
/// - Keep the most recent `window` sales, or all of them if there are fewer.
/// - Return the mean `quantity` over the kept sales.
///
/// Short histories are averaged over what exists, never padded with zeros.
/// An empty history yields `0.0`. A `window` of 0 is treated as 1.
pub fn forecast(sales: &[&Sale], window: usize) -> f64 {
    if sales.is_empty() {
        return 0.0;
    }

    let mut recent: Vec<&Sale> = sales.to_vec();
    // Stable sort: sales sharing a timestamp keep their input order.
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(window.max(1));

    let total: u64 = recent.iter().map(|s| s.quantity).sum();
    total as f64 / recent.len() as f64
}
