//! Posy Storefront library.
//!
//! This crate provides the customer-facing gateway as a library, allowing
//! the router to be tested in-process and reused by the binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod upstream;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the complete storefront router with its middleware stack.
///
/// The Sentry tower layers are added by the binary so the library router
/// stays usable in tests without a Sentry client.
#[must_use]
pub fn app(state: AppState) -> Router {
    routes::routes()
        .layer(axum::middleware::from_fn(
            middleware::request_id::request_id_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
