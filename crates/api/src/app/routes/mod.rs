use axum::{Router, routing::get};

pub mod insights;
pub mod system;

/// Router for the dashboard data endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/insights", get(insights::get_insights))
        .route("/stocks", get(insights::get_stocks))
}
