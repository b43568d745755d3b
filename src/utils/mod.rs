//! Utility helpers shared across layers.
//!
//! - [`js_number`] - Number rendering compatible with JavaScript clients and log consumers

pub mod js_number;

pub use js_number::JsNumber;
