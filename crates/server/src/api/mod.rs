//! HTTP routes.

pub mod admin;
pub mod error;
pub mod feedback;
pub mod state;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use campus_api_types::HealthCheckResponse;
use tower_http::cors::CorsLayer;

pub use admin::create_admin_router;
pub use error::ApiError;
pub use feedback::create_feedback_router;
pub use state::AppState;

/// Complete application router with middleware applied.
pub fn create_app(state: Arc<AppState>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(create_feedback_router())
        .merge(create_admin_router())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse::ok())
}
