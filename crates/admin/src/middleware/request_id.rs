//! Request correlation via `x-request-id`.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tag every request with an ID and echo it on the response.
///
/// An inbound `x-request-id` (set by a load balancer or an edge proxy) is
/// reused so back-office reports correlate across hops; otherwise a UUID
/// v4 is minted. The ID is recorded in the current tracing span and, when
/// a Sentry client is configured, set as a scope tag.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request_id_for(request.headers());

    Span::current().record("request_id", request_id.as_str());

    if sentry::Hub::current().client().is_some() {
        sentry::configure_scope(|scope| scope.set_tag("request_id", &request_id));
    }

    let mut response = next.run(request).await;

    // Echo back so operators can cite the ID in problem reports
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// Reuse the inbound ID when it is usable, otherwise mint one.
fn request_id_for(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.trim().is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from)
}
