//! HTTP middleware for request processing.
//!
//! Provides request event logging, panic recovery, and tracing spans.

pub mod catch_panic;
pub mod request_log;
pub mod tracing;
