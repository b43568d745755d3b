use std::sync::Arc;

use crate::application::services::CalculatorService;
use crate::domain::{EventSink, NumberParsing};

/// Shared state injected into handlers and middleware.
///
/// Cloning is cheap; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<CalculatorService>,
    pub sink: Arc<dyn EventSink>,
    pub service_name: Arc<str>,
}

impl AppState {
    pub fn new(
        sink: Arc<dyn EventSink>,
        number_parsing: NumberParsing,
        service_name: impl Into<Arc<str>>,
    ) -> Self {
        let calculator = Arc::new(CalculatorService::new(sink.clone(), number_parsing));

        Self {
            calculator,
            sink,
            service_name: service_name.into(),
        }
    }
}
