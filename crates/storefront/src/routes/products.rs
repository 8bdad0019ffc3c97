//! Product route handlers.

use axum::{
    extract::{Path, RawQuery, Request, State},
    response::Response,
};
use posy_core::ProductId;
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// List products, passing the caller's query string (e.g. `?q=`) through.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    request: Request,
) -> Result<Response> {
    let path = query.map_or_else(
        || "/products".to_string(),
        |q| format!("/products?{q}"),
    );
    state.upstream().forward(&path, request).await
}

/// Fetch a single product.
#[instrument(skip_all, fields(product_id = %id))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    request: Request,
) -> Result<Response> {
    state.upstream().forward(&format!("/products/{id}"), request).await
}
