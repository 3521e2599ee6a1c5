//! Confidence estimation from sample size.

use stockpulse_sales::Sale;

/// Confidence reported when there is no history at all.
pub const NEUTRAL_CONFIDENCE: f64 = 0.5;

/// Sample count at which confidence has closed ~63% of the gap to 1.0.
const SATURATION_SAMPLES: f64 = 20.0;

/// Confidence in \[0.5, 1.0\] for a product's sale history.
pub fn confidence(sales: &[&Sale]) -> f64 {
    confidence_for_samples(sales.len())
}

/// Saturating curve `0.5 + 0.5 * (1 - e^(-n/20))`, clamped to 1.0 and rounded
/// to two decimals. `n = 0` is exactly 0.5.
pub fn confidence_for_samples(n: usize) -> f64 {
    if n == 0 {
        return NEUTRAL_CONFIDENCE;
    }
    let c = 0.5 + 0.5 * (1.0 - (-(n as f64) / SATURATION_SAMPLES).exp());
    round2(c).min(1.0)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
