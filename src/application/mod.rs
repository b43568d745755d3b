//! Application layer services implementing the request pipeline.
//!
//! Services combine domain validation and arithmetic with event logging and
//! hand HTTP handlers a ready-to-render outcome.
//!
//! # Available Services
//!
//! - [`services::calculator_service::CalculatorService`] - Validate, compute and log one operation

pub mod services;
