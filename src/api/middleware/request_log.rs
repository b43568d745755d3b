//! Request/response event logging middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Logs every request on arrival and once its response is ready.
///
/// # Events
///
/// ```text
/// Incoming request: GET /add?num1=2&num2=3
/// Request completed with statusCode: 200
/// ```
///
/// The request and response pass through unchanged.
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .merge(calculator_routes())
///     .layer(middleware::from_fn_with_state(state.clone(), request_log::layer));
/// ```
pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let target = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path(), |pq| pq.as_str())
        .to_string();

    state
        .sink
        .info(&format!("Incoming request: {} {}", req.method(), target));

    let response = next.run(req).await;

    state.sink.info(&format!(
        "Request completed with statusCode: {}",
        response.status().as_u16()
    ));

    response
}
