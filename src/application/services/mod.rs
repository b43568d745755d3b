//! Business logic services for the application layer.

pub mod calculator_service;

pub use calculator_service::CalculatorService;
