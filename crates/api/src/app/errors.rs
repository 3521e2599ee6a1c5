use axum::BoxError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockpulse_infra::StoreError;

/// Store failures are fatal to the request; the cause is passed through.
pub fn store_error_to_response(context: &str, err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "{context}");
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "store_error",
        format!("{context}: {err}"),
    )
}

pub async fn handle_middleware_error(err: BoxError) -> axum::response::Response {
    if err.is::<tower::timeout::error::Elapsed>() {
        json_error(StatusCode::REQUEST_TIMEOUT, "timeout", "request timed out")
    } else {
        json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            err.to_string(),
        )
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
