//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AdminConfig;
use crate::upstream::{UpstreamClient, UpstreamError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the upstream API client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    upstream: UpstreamClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream HTTP client cannot be built.
    pub fn new(config: AdminConfig) -> Result<Self, UpstreamError> {
        let upstream = UpstreamClient::new(&config.api_base_url)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, upstream }),
        })
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the upstream commerce API client.
    #[must_use]
    pub fn upstream(&self) -> &UpstreamClient {
        &self.inner.upstream
    }
}
