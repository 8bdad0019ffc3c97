//! Order list handler.

use axum::{
    Json,
    extract::{RawQuery, State},
    http::{HeaderMap, StatusCode},
};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::OrdersPayload;
use crate::state::AppState;
use crate::upstream::UpstreamError;

/// List orders with the caller's `status`/`q` filters, normalizing the
/// status-count summary so every status is present.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Result<Json<OrdersPayload>> {
    let path = query.map_or_else(
        || "/admin/orders".to_string(),
        |q| format!("/admin/orders?{q}"),
    );

    let payload: OrdersPayload = state
        .upstream()
        .get_json(&path, &headers)
        .await
        .map_err(|err| match err {
            UpstreamError::Status { status, .. } if status == StatusCode::UNAUTHORIZED => {
                AppError::Unauthorized("Admin login required".to_string())
            }
            other => AppError::from(other),
        })?;

    Ok(Json(payload.normalized()))
}
