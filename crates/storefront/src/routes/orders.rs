//! Order route handlers.

use axum::{
    extract::{Path, Request, State},
    response::Response,
};
use posy_core::OrderNo;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Place an order from the current cart.
///
/// The body carries the shipping form (`recipientName`, `phone`, `zipcode`,
/// `address1`, `address2`, `memo`); the upstream validates it.
#[instrument(skip_all)]
pub async fn checkout(State(state): State<AppState>, request: Request) -> Result<Response> {
    state.upstream().forward("/orders/checkout", request).await
}

/// List the caller's orders.
#[instrument(skip_all)]
pub async fn index(State(state): State<AppState>, request: Request) -> Result<Response> {
    state.upstream().forward("/orders", request).await
}

/// Fetch one order (`{ order, items }`) by its order number.
#[instrument(skip_all, fields(order_no = %order_no))]
pub async fn show(
    State(state): State<AppState>,
    Path(order_no): Path<OrderNo>,
    request: Request,
) -> Result<Response> {
    state
        .upstream()
        .forward(&format!("/orders/{}", order_no.path_segment()), request)
        .await
}
