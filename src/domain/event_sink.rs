//! Destination for leveled log events.

/// Receives the info and error events produced while handling requests.
///
/// Handlers and middleware get the sink injected through
/// [`crate::state::AppState`] instead of logging through a global, so tests
/// can observe exactly which events a request produced.
///
/// # Implementations
///
/// - [`crate::infrastructure::logging::TracingEventSink`] - forwards to `tracing`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait EventSink: Send + Sync {
    fn info(&self, message: &str);

    fn error(&self, message: &str);
}
