//! Cart route handlers.
//!
//! The cart lives upstream, keyed by the session cookie; every operation
//! is a relay.

use axum::{
    extract::{Path, Request, State},
    response::Response,
};
use posy_core::CartItemId;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Fetch the current cart.
#[instrument(skip_all)]
pub async fn show(State(state): State<AppState>, request: Request) -> Result<Response> {
    state.upstream().forward("/cart", request).await
}

/// Add an item (`{ productId, quantity }`) to the cart.
#[instrument(skip_all)]
pub async fn add_item(State(state): State<AppState>, request: Request) -> Result<Response> {
    state.upstream().forward("/cart/items", request).await
}

/// Change an item's quantity (`{ quantity }`).
#[instrument(skip_all, fields(cart_item_id = %id))]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<CartItemId>,
    request: Request,
) -> Result<Response> {
    state
        .upstream()
        .forward(&format!("/cart/items/{id}"), request)
        .await
}

/// Remove an item from the cart.
#[instrument(skip_all, fields(cart_item_id = %id))]
pub async fn remove_item(
    State(state): State<AppState>,
    Path(id): Path<CartItemId>,
    request: Request,
) -> Result<Response> {
    state
        .upstream()
        .forward(&format!("/cart/items/{id}"), request)
        .await
}
