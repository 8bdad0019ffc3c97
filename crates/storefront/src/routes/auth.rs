//! Auth route handlers.
//!
//! Sessions are owned by the upstream commerce API and live entirely in
//! cookies; these handlers only relay requests and the upstream's
//! `Set-Cookie` replies.

use axum::{extract::Request, extract::State, response::Response};
use tracing::instrument;

use crate::error::Result;
use crate::state::AppState;

/// Log in with email and password.
#[instrument(skip_all)]
pub async fn login(State(state): State<AppState>, request: Request) -> Result<Response> {
    state.upstream().forward("/auth/login", request).await
}

/// Create a new account.
#[instrument(skip_all)]
pub async fn register(State(state): State<AppState>, request: Request) -> Result<Response> {
    state.upstream().forward("/auth/register", request).await
}

/// Fetch the current session user.
#[instrument(skip_all)]
pub async fn me(State(state): State<AppState>, request: Request) -> Result<Response> {
    state.upstream().forward("/auth/me", request).await
}

/// End the current session.
#[instrument(skip_all)]
pub async fn logout(State(state): State<AppState>, request: Request) -> Result<Response> {
    state.upstream().forward("/auth/logout", request).await
}
