//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service liveness.
///
/// # Endpoint
///
/// `GET /health`
///
/// The service has no external dependencies, so a response always means
/// healthy.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "calculator-microservice",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.service_name.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
