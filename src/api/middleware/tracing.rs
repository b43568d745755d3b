//! HTTP request tracing span middleware.

use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Opens an `INFO` span per request carrying the method, URI and HTTP
/// version, so every event logged while handling the request is tagged with
/// it. The request/response lines themselves come from
/// [`super::request_log::layer`]; the default `tower-http` events are
/// demoted to `DEBUG` to avoid logging each request twice.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/add?num1=2&num2=3 version=HTTP/1.1}: Addition operation: 2 + 3 = 5
/// ```
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::DEBUG))
}
