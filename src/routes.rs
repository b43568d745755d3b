//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /add`, `/subtract`, `/multiply`, `/divide` - Arithmetic on `num1`/`num2`
//! - `GET /health`                                 - Liveness check
//!
//! # Middleware (outermost first)
//!
//! - **Tracing** - Per-request span with method and URI
//! - **Request log** - `Incoming request` / `Request completed` events
//! - **Panic recovery** - Logged `500` envelope instead of a dropped connection

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{catch_panic, request_log, tracing as http_tracing};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
///
/// Trailing-slash normalisation is applied by [`crate::server::run`] around
/// the finished router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::calculator_routes())
        .route("/health", get(health_handler))
        .fallback(|| async { StatusCode::NOT_FOUND })
        .layer(catch_panic::layer(state.calculator.clone()))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            request_log::layer,
        ))
        .layer(http_tracing::layer())
        .with_state(state)
}
