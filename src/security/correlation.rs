use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::{debug, info_span, Instrument};
use uuid::Uuid;

/// Response header carrying the per-request correlation ID
pub const CORRELATION_HEADER: HeaderName = HeaderName::from_static("x-api-correlation-id");

/// Middleware: tag every response with a fresh correlation ID
///
/// The inner service runs inside a `request` span carrying the ID. The header
/// is set after the inner service returns, so rejections and misses produced
/// further in are tagged too.
pub async fn tag_correlation(req: Request, next: Next) -> Response {
    let id = Uuid::new_v4();
    let span = info_span!("request", correlation_id = %id, path = %req.uri().path());
    span.in_scope(|| debug!("Tagging request"));

    let mut response = next.run(req).instrument(span).await;

    // A hyphenated UUID is always a valid header value
    if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
        response.headers_mut().insert(CORRELATION_HEADER, value);
    }

    response
}
