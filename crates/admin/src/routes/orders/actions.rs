//! Order mutation handlers: status changes and shipment registration.
//!
//! Both routes validate and normalize the body gateway-side before
//! forwarding, so the upstream only ever sees canonical payloads. Which
//! status transitions are legal remains the upstream's call.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, Method},
    response::Response,
};
use posy_core::{OrderNo, OrderStatus};
use serde_json::json;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::{ShippingForm, StatusForm};
use crate::state::AppState;

/// Change an order's status.
///
/// Accepts any spelling `OrderStatus` parses (case-insensitive,
/// `CANCELLED` alias included) and forwards the canonical form. Mounted
/// on both PATCH and POST; the inbound method is forwarded as-is.
#[instrument(skip_all, fields(order_no = %order_no))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(order_no): Path<OrderNo>,
    method: Method,
    headers: HeaderMap,
    Json(form): Json<StatusForm>,
) -> Result<Response> {
    let status: OrderStatus = form.status.parse().map_err(|_| {
        AppError::BadRequest(format!("Invalid order status: {}", form.status))
    })?;

    state
        .upstream()
        .send_json(
            method,
            &format!("/admin/orders/{}/status", order_no.path_segment()),
            &headers,
            &json!({ "status": status.as_str() }),
        )
        .await
}

/// Register a shipment for an order.
///
/// Requires non-blank `courier` and `trackingNo`; `autoShip` defaults to
/// true so registering a tracking number also moves the order to SHIPPED
/// upstream.
#[instrument(skip_all, fields(order_no = %order_no))]
pub async fn ship(
    State(state): State<AppState>,
    Path(order_no): Path<OrderNo>,
    headers: HeaderMap,
    Json(form): Json<ShippingForm>,
) -> Result<Response> {
    let form = form
        .normalized()
        .map_err(|message| AppError::BadRequest(message.to_string()))?;
    let body = serde_json::to_value(&form).map_err(|e| AppError::Internal(e.to_string()))?;

    state
        .upstream()
        .send_json(
            Method::POST,
            &format!("/admin/orders/{}/shipping", order_no.path_segment()),
            &headers,
            &body,
        )
        .await
}
