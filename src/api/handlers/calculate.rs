//! Handlers for the arithmetic endpoints.
//!
//! All four routes share [`calculate`]; they differ only in the
//! [`Operation`] they pass along.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::calculation::{CalculationQuery, CalculationResponse};
use crate::domain::{Operation, RawOperands};
use crate::error::AppError;
use crate::state::AppState;

type QueryResult = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Adds `num1` and `num2`.
///
/// # Endpoint
///
/// `GET /add?num1=2&num2=3`
///
/// # Response
///
/// ```json
/// { "statuscode": 200, "Result": 5 }
/// ```
///
/// # Errors
///
/// - **400**: `num1` or `num2` missing or empty
/// - **400**: `num1` or `num2` is not a number
pub async fn add_handler(
    State(state): State<AppState>,
    query: QueryResult,
) -> Result<Json<CalculationResponse>, AppError> {
    calculate(&state, Operation::Add, query)
}

/// Subtracts `num2` from `num1`.
///
/// `GET /subtract?num1=5&num2=2.5`
///
/// Same error cases as [`add_handler`].
pub async fn subtract_handler(
    State(state): State<AppState>,
    query: QueryResult,
) -> Result<Json<CalculationResponse>, AppError> {
    calculate(&state, Operation::Subtract, query)
}

/// Multiplies `num1` by `num2`.
///
/// `GET /multiply?num1=4&num2=0`
///
/// Same error cases as [`add_handler`].
pub async fn multiply_handler(
    State(state): State<AppState>,
    query: QueryResult,
) -> Result<Json<CalculationResponse>, AppError> {
    calculate(&state, Operation::Multiply, query)
}

/// Divides `num1` by `num2`.
///
/// # Endpoint
///
/// `GET /divide?num1=9&num2=3`
///
/// # Errors
///
/// As [`add_handler`], plus **400** `"Division by zero is not allowed"`
/// when `num2` is zero.
pub async fn divide_handler(
    State(state): State<AppState>,
    query: QueryResult,
) -> Result<Json<CalculationResponse>, AppError> {
    calculate(&state, Operation::Divide, query)
}

/// Runs one operation against the decoded query.
///
/// A query string that cannot be decoded is logged and answered like an
/// invalid number.
fn calculate(
    state: &AppState,
    operation: Operation,
    query: QueryResult,
) -> Result<Json<CalculationResponse>, AppError> {
    let Query(pairs) =
        query.map_err(|rejection| state.calculator.reject_query(rejection.body_text()))?;

    let raw: RawOperands = CalculationQuery::from_pairs(pairs).into();
    let calculation = state.calculator.calculate(operation, &raw)?;

    Ok(Json(calculation.into()))
}
