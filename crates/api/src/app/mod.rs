//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: catalog selection and the shared insight service
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;
use std::time::Duration;

use axum::{Extension, Router, error_handling::HandleErrorLayer, routing::get};
use tower::ServiceBuilder;

pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: AppServices, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(Extension(Arc::new(services)))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(errors::handle_middleware_error))
                .timeout(request_timeout),
        )
}
