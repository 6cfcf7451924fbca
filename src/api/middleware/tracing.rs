//! Structured request/response logging middleware.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates the tracing middleware for the HTTP surface.
///
/// # Logging Behavior
///
/// Each request runs inside an `INFO` span named `request` carrying the
/// method and URI. The response event under that span records the status
/// code and the latency in microseconds; the request-started event stays
/// at `DEBUG`, so a redirect hit logs a single line at the default
/// `info` filter.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/r7Qk2b version=HTTP/1.1}: finished processing request latency=42 μs status=302
/// INFO request{method=POST uri=/api/shorten version=HTTP/1.1}: finished processing request latency=118 μs status=200
/// ```
///
/// # Integration
///
/// ```rust,ignore
/// let router = Router::new()
///     .route("/{code}", get(redirect_handler))
///     .layer(tracing::layer());
/// ```
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Micros),
        )
}
