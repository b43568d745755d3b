//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`logging`] - `tracing` subscriber with console and file sinks, and the
//!   [`crate::domain::EventSink`] adapter over it

pub mod logging;
