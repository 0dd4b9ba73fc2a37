//! API middleware

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

/// Header carrying the per-request id set by the request-id layer
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Audit logging middleware
///
/// Logs method, uri, status, duration and request id for every request.
/// Failed requests are logged at warn.
pub async fn audit_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis() as u64;
    let status = response.status();

    if status.is_client_error() || status.is_server_error() {
        warn!(
            method = %method,
            uri = %uri,
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms,
            "API request failed"
        );
    } else {
        info!(
            method = %method,
            uri = %uri,
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms,
            "API request"
        );
    }

    response
}
