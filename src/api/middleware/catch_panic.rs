//! Turns a panicking handler into a logged `500` response.

use std::any::Any;
use std::sync::Arc;

use axum::{
    body::Body,
    http::Response,
    response::IntoResponse,
};
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::application::services::CalculatorService;

/// Builds the `500` response for a caught panic.
///
/// The panic payload is logged as `Internal server error: <details>`; the
/// caller only sees the generic envelope:
///
/// ```json
/// { "statuscode": 500, "error": "Internal server error" }
/// ```
#[derive(Clone)]
pub struct InternalErrorResponder {
    calculator: Arc<CalculatorService>,
}

impl ResponseForPanic for InternalErrorResponder {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response<Body> {
        let details = if let Some(message) = err.downcast_ref::<String>() {
            message.as_str()
        } else if let Some(message) = err.downcast_ref::<&str>() {
            message
        } else {
            "unknown panic"
        };

        self.calculator.internal_error(details).into_response()
    }
}

/// Creates the panic-catching layer.
///
/// Must sit inside [`super::request_log::layer`] so the `500` is still
/// reported as a completed request.
pub fn layer(calculator: Arc<CalculatorService>) -> CatchPanicLayer<InternalErrorResponder> {
    CatchPanicLayer::custom(InternalErrorResponder { calculator })
}
