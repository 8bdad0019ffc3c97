//! Checkout summary handler.
//!
//! The one storefront route that looks inside an upstream payload: it
//! fetches the caller's cart and computes the totals the checkout page
//! shows, so the shipping quote rule lives in exactly one place.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::{CartPayload, CheckoutSummary};
use crate::state::AppState;

/// Compute checkout totals from the upstream cart.
#[instrument(skip_all)]
pub async fn summary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<CheckoutSummary>> {
    let cart: CartPayload = state
        .upstream()
        .get_json("/cart", &headers)
        .await
        .map_err(|err| match err {
            crate::upstream::UpstreamError::Status { status, .. }
                if status == StatusCode::UNAUTHORIZED =>
            {
                AppError::Unauthorized("Login required".to_string())
            }
            other => AppError::from(other),
        })?;

    Ok(Json(CheckoutSummary::from_items(&cart.items)))
}
