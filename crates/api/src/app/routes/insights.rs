use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::app::errors;
use crate::app::services::AppServices;

/// Per-product insights, summary and `generated_at`.
pub async fn get_insights(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.insight_service().insights().await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => errors::store_error_to_response("failed to generate insights", e),
    }
}

/// Flattened stock levels and `generated_at`.
pub async fn get_stocks(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.insight_service().stock_levels().await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => errors::store_error_to_response("failed to fetch stock info", e),
    }
}
