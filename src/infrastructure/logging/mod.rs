//! Logging backend: `tracing` subscriber setup and the [`EventSink`] adapter.
//!
//! Provides:
//! - [`TracingEventSink`] - Production sink forwarding events to `tracing`
//! - [`init`] - Installs console, error-file and combined-file sinks
//!
//! [`EventSink`]: crate::domain::EventSink

mod subscriber;
mod tracing_sink;

pub use subscriber::{COMBINED_LOG_FILE, ERROR_LOG_FILE, LogGuards, init};
pub use tracing_sink::TracingEventSink;
