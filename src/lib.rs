//! # Calculator Service
//!
//! A small arithmetic microservice built with Axum. It exposes addition,
//! subtraction, multiplication and division over query parameters,
//! validates input, and logs every request, result and failure.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Operands, operations and the event sink contract
//! - **Application Layer** ([`application`]) - The shared validate-compute-log pipeline
//! - **Infrastructure Layer** ([`infrastructure`]) - Logging backend and sinks
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Endpoints
//!
//! ```text
//! GET /add?num1=2&num2=3        -> 200 {"statuscode":200,"Result":5}
//! GET /divide?num1=9&num2=0     -> 400 {"statuscode":400,"error":"Division by zero is not allowed"}
//! GET /add?num1=foo&num2=3      -> 400 {"statuscode":400,"error":"Please provide valid numbers"}
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl 'http://localhost:3000/multiply?num1=4&num2=2.5'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::CalculatorService;
    pub use crate::domain::{EventSink, NumberParsing, Operation, RawOperands};
    pub use crate::error::{AppError, ErrorBody};
    pub use crate::state::AppState;
}
