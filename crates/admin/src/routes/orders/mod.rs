//! Admin order route handlers.

pub mod actions;
pub mod detail;
pub mod list;

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::state::AppState;

/// Create the admin order routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list::index))
        .route("/{order_no}", get(detail::show))
        .route(
            "/{order_no}/status",
            patch(actions::update_status).post(actions::update_status),
        )
        .route("/{order_no}/shipping", post(actions::ship))
}
