//! API route configuration.

use crate::api::handlers::{add_handler, divide_handler, multiply_handler, subtract_handler};
use crate::domain::Operation;
use crate::state::AppState;
use axum::{Router, routing::get};

/// The four arithmetic routes.
///
/// # Endpoints
///
/// - `GET /add?num1=&num2=`       - `num1 + num2`
/// - `GET /subtract?num1=&num2=`  - `num1 - num2`
/// - `GET /multiply?num1=&num2=`  - `num1 * num2`
/// - `GET /divide?num1=&num2=`    - `num1 / num2`, rejects `num2 == 0`
pub fn calculator_routes() -> Router<AppState> {
    Router::new()
        .route(Operation::Add.path(), get(add_handler))
        .route(Operation::Subtract.path(), get(subtract_handler))
        .route(Operation::Multiply.path(), get(multiply_handler))
        .route(Operation::Divide.path(), get(divide_handler))
}
