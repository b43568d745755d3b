//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod calculate;
pub mod health;

pub use calculate::{add_handler, divide_handler, multiply_handler, subtract_handler};
pub use health::health_handler;
