//! HTTP-facing error type and the error response envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{CalculationError, ValidationError};

/// JSON body returned for every failed request.
///
/// ```json
/// { "statuscode": 400, "error": "Please provide valid numbers" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub statuscode: u16,
    pub error: String,
}

/// Errors surfaced to callers.
///
/// The `Display` text is the user-facing `error` string; log messages come
/// from the domain errors these are converted from.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Please provide num1 and num2 parameters")]
    MissingParameters,

    #[error("Please provide valid numbers")]
    InvalidNumber,

    #[error("Division by zero is not allowed")]
    DivisionByZero,

    #[error("Internal server error")]
    Internal { details: String },
}

impl AppError {
    pub fn internal(details: impl Into<String>) -> Self {
        Self::Internal {
            details: details.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingParameters | AppError::InvalidNumber | AppError::DivisionByZero => {
                StatusCode::BAD_REQUEST
            }
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            statuscode: self.status_code().as_u16(),
            error: self.to_string(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingParameters { .. } => AppError::MissingParameters,
            ValidationError::InvalidNumber { .. } | ValidationError::MalformedQuery { .. } => {
                AppError::InvalidNumber
            }
        }
    }
}

impl From<CalculationError> for AppError {
    fn from(err: CalculationError) -> Self {
        match err {
            CalculationError::DivisionByZero { .. } => AppError::DivisionByZero,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_body())).into_response()
    }
}
