//! Posy Admin library.
//!
//! This crate provides the back-office gateway as a library, allowing the
//! router to be tested in-process and reused by the binary.
//!
//! The admin surface has a different trust profile than the storefront:
//! it only exposes the upstream's `/admin/*` order-management endpoints
//! plus the session lookup the UI gates on.

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

/// Build the complete admin router with its middleware stack.
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
