//! Request forwarding to the upstream commerce API.
//!
//! The gateway keeps no business logic of its own; almost every route is a
//! straight relay. The contract:
//!
//! - Request headers are copied except `Host`, hop-by-hop headers and
//!   `Content-Length` (the client recomputes it).
//! - The raw request body is forwarded for any method other than GET/HEAD.
//! - A JSON upstream reply passes through with its status unchanged.
//! - A non-JSON reply is wrapped as `{ "ok": false, "message": <text> }`
//!   with the upstream status preserved.
//! - A connection-level failure becomes `502 Bad Gateway` with a `detail`
//!   field carrying the client error string.
//! - `Set-Cookie` headers are always propagated; upstream sessions live in
//!   cookies and login/logout break without them.

use axum::{
    Json,
    body::to_bytes,
    extract::Request,
    http::{HeaderMap, HeaderValue, Method, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::instrument;

use super::{UpstreamClient, UpstreamError};
use crate::error::AppError;

/// Message for the 502 envelope when the upstream is unreachable.
pub const GATEWAY_ERROR_MESSAGE: &str = "Failed to reach upstream API";

/// Message substituted for an empty non-JSON upstream body.
pub const NON_JSON_MESSAGE: &str = "Upstream returned non-JSON response";

/// Maximum buffered request body size (1 MiB).
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

impl UpstreamClient {
    /// Forward an inbound request to the upstream and relay the reply.
    ///
    /// `path_and_query` is the upstream path, query string included, and is
    /// appended verbatim to the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns a 400 `AppError` when the request body cannot be buffered
    /// and a 502 `AppError` when the upstream cannot be reached.
    #[instrument(skip_all, fields(path = path_and_query))]
    pub async fn forward(
        &self,
        path_and_query: &str,
        request: Request,
    ) -> Result<Response, AppError> {
        let (parts, body) = request.into_parts();
        let url = format!("{}{}", self.inner.base_url, path_and_query);

        let mut builder = self
            .inner
            .client
            .request(parts.method.clone(), &url)
            .headers(filter_request_headers(&parts.headers));

        if parts.method != Method::GET && parts.method != Method::HEAD {
            let bytes = to_bytes(body, MAX_BODY_BYTES).await.map_err(|_| {
                AppError::BadRequest("Request body too large or unreadable".to_string())
            })?;
            builder = builder.body(bytes);
        }

        let upstream = builder.send().await.map_err(UpstreamError::Connect)?;
        relay(upstream).await
    }
}

/// Turn an upstream reply into the gateway response.
async fn relay(upstream: reqwest::Response) -> Result<Response, AppError> {
    let status = upstream.status();
    let headers = upstream.headers().clone();

    let mut response = if is_json_content_type(&headers) {
        let bytes = upstream.bytes().await.map_err(UpstreamError::Body)?;
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .cloned()
            .unwrap_or_else(|| HeaderValue::from_static("application/json"));
        (status, [(header::CONTENT_TYPE, content_type)], bytes).into_response()
    } else {
        let text = upstream.text().await.map_err(UpstreamError::Body)?;
        let message = if text.trim().is_empty() {
            NON_JSON_MESSAGE.to_string()
        } else {
            text
        };
        (status, Json(json!({ "ok": false, "message": message }))).into_response()
    };

    relay_set_cookies(&headers, response.headers_mut());
    Ok(response)
}

/// Copy request headers, dropping the ones a proxy must not forward.
pub(super) fn filter_request_headers(headers: &HeaderMap) -> HeaderMap {
    let mut filtered = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if *name == header::HOST || *name == header::CONTENT_LENGTH || is_hop_by_hop(name.as_str())
        {
            continue;
        }
        filtered.append(name.clone(), value.clone());
    }
    filtered
}

/// Hop-by-hop headers per RFC 9110 §7.6.1.
fn is_hop_by_hop(name: &str) -> bool {
    name.eq_ignore_ascii_case("connection")
        || name.eq_ignore_ascii_case("keep-alive")
        || name.eq_ignore_ascii_case("proxy-authenticate")
        || name.eq_ignore_ascii_case("proxy-authorization")
        || name.eq_ignore_ascii_case("te")
        || name.eq_ignore_ascii_case("trailer")
        || name.eq_ignore_ascii_case("transfer-encoding")
        || name.eq_ignore_ascii_case("upgrade")
}

/// Whether the upstream reply claims a JSON body.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.to_ascii_lowercase().contains("application/json"))
}

/// Propagate every `Set-Cookie` header from the upstream reply.
fn relay_set_cookies(src: &HeaderMap, dst: &mut HeaderMap) {
    for value in src.get_all(header::SET_COOKIE) {
        dst.append(header::SET_COOKIE, value.clone());
    }
}
