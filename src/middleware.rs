//! Request-scoped middleware.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Ensure every request has an ID.
///
/// - Taken from the incoming `x-request-id` header, or a fresh UUID v4
/// - Inserted into request extensions as [`RequestId`]
/// - Set on the response as the `x-request-id` header
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, val);
    }

    res
}

/// ID stored by [`request_id`], or `"-"` when the middleware has not run.
fn request_id_of(req: &Request) -> &str {
    req.extensions()
        .get::<RequestId>()
        .map_or("-", |id| id.0.as_str())
}

/// Span for `TraceLayer::make_span_with`, tagged with the request ID.
///
/// The request-id layer must wrap the trace layer so the extension is
/// present when the span is created.
pub fn make_request_span(req: &Request) -> Span {
    tracing::info_span!(
        "request",
        method = %req.method(),
        uri = %req.uri(),
        request_id = %request_id_of(req),
    )
}
