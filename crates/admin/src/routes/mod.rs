//! HTTP route handlers for the admin gateway.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                             - Liveness check
//! GET  /health/ready                       - Readiness check (pings the upstream)
//!
//! # Auth
//! GET  /api/auth/me                        - Current session user (role gate)
//!
//! # Orders
//! GET   /api/admin/orders                  - Order list + normalized summary
//! GET   /api/admin/orders/{order_no}       - Order detail
//! PATCH /api/admin/orders/{order_no}/status   - Change status (validated)
//! POST  /api/admin/orders/{order_no}/status   - Same handler, legacy clients
//! POST  /api/admin/orders/{order_no}/shipping - Register shipment (validated)
//! ```

pub mod auth;
pub mod orders;

use axum::{Router, extract::State, http::StatusCode, routing::get};

use crate::state::AppState;

/// Create all routes for the admin gateway.
pub fn routes() -> Router<AppState> {
    let api = Router::new()
        .route("/auth/me", get(auth::me))
        .nest("/admin/orders", orders::routes());

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .nest("/api", api)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies upstream connectivity before returning OK.
/// Returns 503 Service Unavailable if the upstream is not reachable.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.upstream().ping().await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
