//! Upstream commerce API client.
//!
//! A thin `reqwest` wrapper shared through [`crate::state::AppState`].
//! Redirect following is disabled so upstream redirects reach the browser
//! untouched, and the 30-second timeout keeps a wedged upstream from
//! pinning gateway connections.

mod proxy;

pub use proxy::{GATEWAY_ERROR_MESSAGE, MAX_BODY_BYTES, NON_JSON_MESSAGE};

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use tracing::instrument;

/// Errors from talking to the upstream commerce API.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The HTTP client could not be constructed.
    #[error("failed to build upstream HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    /// The upstream could not be reached (DNS, connect, timeout).
    #[error("failed to reach upstream API: {0}")]
    Connect(#[source] reqwest::Error),
    /// The connection dropped while reading the response body.
    #[error("failed to read upstream response: {0}")]
    Body(#[source] reqwest::Error),
    /// A typed fetch got a non-success status. The upstream's error body
    /// is kept so it reaches the client unchanged.
    #[error("upstream returned {status}")]
    Status {
        status: StatusCode,
        body: serde_json::Value,
    },
    /// A typed fetch got a body that does not match the expected shape.
    #[error("invalid upstream payload: {0}")]
    Payload(#[source] serde_json::Error),
}

/// Client for the upstream commerce API.
///
/// Cheaply cloneable via `Arc`. Handlers use [`UpstreamClient::forward`]
/// for passthrough routes and [`UpstreamClient::get_json`] where the
/// gateway needs to look inside the response.
#[derive(Clone)]
pub struct UpstreamClient {
    inner: Arc<UpstreamClientInner>,
}

struct UpstreamClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a new upstream client.
    ///
    /// `base_url` must already be normalized (no trailing slash), which
    /// [`crate::config::StorefrontConfig::from_env`] guarantees.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(UpstreamError::Build)?;

        Ok(Self {
            inner: Arc::new(UpstreamClientInner {
                client,
                base_url: base_url.to_string(),
            }),
        })
    }

    /// The configured upstream base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Check that the upstream is reachable.
    ///
    /// Issues a HEAD request to the base URL; any response counts as
    /// reachable, only connection-level failures are errors.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Connect`] if the upstream cannot be reached.
    pub async fn ping(&self) -> Result<(), UpstreamError> {
        self.inner
            .client
            .head(&self.inner.base_url)
            .send()
            .await
            .map_err(UpstreamError::Connect)?;
        Ok(())
    }

    /// Fetch a JSON payload from the upstream as a typed value.
    ///
    /// The caller's request headers are forwarded (minus `Host` and
    /// hop-by-hop headers) so upstream session cookies keep working.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Status`] for any non-2xx reply, and
    /// [`UpstreamError::Payload`] when the body does not deserialize.
    #[instrument(skip_all, fields(path = path_and_query))]
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path_and_query: &str,
        headers: &HeaderMap,
    ) -> Result<T, UpstreamError> {
        let url = format!("{}{}", self.inner.base_url, path_and_query);

        let response = self
            .inner
            .client
            .get(&url)
            .headers(proxy::filter_request_headers(headers))
            .send()
            .await
            .map_err(UpstreamError::Connect)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(UpstreamError::Body)?;
        if !status.is_success() {
            // Relay the upstream's own error body; wrap non-JSON text
            let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                let text = String::from_utf8_lossy(&bytes);
                let message = if text.trim().is_empty() {
                    NON_JSON_MESSAGE.to_string()
                } else {
                    text.into_owned()
                };
                serde_json::json!({ "ok": false, "message": message })
            });
            return Err(UpstreamError::Status { status, body });
        }

        serde_json::from_slice(&bytes).map_err(UpstreamError::Payload)
    }
}
