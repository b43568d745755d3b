//! Data Transfer Objects for API requests and responses.
//!
//! Error bodies are defined next to the error type in [`crate::error::ErrorBody`].

pub mod calculation;
pub mod health;
