//! [`EventSink`] implementation backed by `tracing`.

use std::sync::Arc;

use crate::domain::EventSink;

/// Forwards events to the global `tracing` subscriber, tagging each with the
/// service name.
///
/// # Example Logs
///
/// ```text
/// INFO calculator_service: Addition operation: 2 + 3 = 5 service="calculator-microservice"
/// ```
#[derive(Clone)]
pub struct TracingEventSink {
    service: Arc<str>,
}

impl TracingEventSink {
    pub fn new(service: impl Into<Arc<str>>) -> Self {
        Self {
            service: service.into(),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }
}

impl EventSink for TracingEventSink {
    fn info(&self, message: &str) {
        tracing::info!(service = %self.service, "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(service = %self.service, "{message}");
    }
}
