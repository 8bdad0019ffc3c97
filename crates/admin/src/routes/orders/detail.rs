//! Order detail handler.

use axum::{
    extract::{Path, Request, State},
    response::Response,
};
use posy_core::OrderNo;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Fetch one order with its items and shipment info.
#[instrument(skip_all, fields(order_no = %order_no))]
pub async fn show(
    State(state): State<AppState>,
    Path(order_no): Path<OrderNo>,
    request: Request,
) -> Result<Response> {
    state
        .upstream()
        .forward(
            &format!("/admin/orders/{}", order_no.path_segment()),
            request,
        )
        .await
}
