//! Auth route handlers.
//!
//! The admin UI calls `/api/auth/me` on load and gates on the returned
//! role; the actual authorization check happens upstream on every
//! `/admin/*` request.

use axum::{extract::Request, extract::State, response::Response};
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Fetch the current session user.
#[instrument(skip_all)]
pub async fn me(State(state): State<AppState>, request: Request) -> Result<Response> {
    state.upstream().forward("/auth/me", request).await
}
