#![allow(dead_code)]

use axum_test::TestServer;
use calculator_service::domain::{EventSink, NumberParsing};
use calculator_service::routes::app_router;
use calculator_service::state::AppState;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

/// Sink that keeps every event in memory so tests can assert on them.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<(Level, String)>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<(Level, String)> {
        self.events.lock().unwrap().clone()
    }

    pub fn messages(&self, level: Level) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }

    fn record(&self, level: Level, message: &str) {
        self.events.lock().unwrap().push((level, message.to_string()));
    }
}

impl EventSink for RecordingSink {
    fn info(&self, message: &str) {
        self.record(Level::Info, message);
    }

    fn error(&self, message: &str) {
        self.record(Level::Error, message);
    }
}

pub fn create_test_state(number_parsing: NumberParsing) -> (AppState, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let state = AppState::new(sink.clone(), number_parsing, "calculator-test");
    (state, sink)
}

/// Server running the full application router (routes and middleware).
pub fn create_app_server() -> (TestServer, Arc<RecordingSink>) {
    let (state, sink) = create_test_state(NumberParsing::Lenient);
    let server = TestServer::new(app_router(state)).unwrap();
    (server, sink)
}
