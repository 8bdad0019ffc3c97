//! HTTP route handlers for the storefront gateway.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                     - Liveness check
//! GET  /health/ready               - Readiness check (pings the upstream)
//!
//! # Auth (forwarded to /auth/*)
//! POST /api/auth/login             - Login
//! POST /api/auth/register          - Register
//! GET  /api/auth/me                - Current session user
//! POST /api/auth/logout            - Logout
//!
//! # Products (forwarded to /products)
//! GET  /api/products               - Product listing (query passed through)
//! GET  /api/products/{id}          - Product detail
//!
//! # Cart (forwarded to /cart)
//! GET    /api/cart                 - Cart contents
//! POST   /api/cart/items           - Add item
//! PATCH  /api/cart/items/{id}      - Update quantity
//! DELETE /api/cart/items/{id}      - Remove item
//!
//! # Checkout
//! GET  /api/checkout/summary       - Totals computed from the upstream cart
//!
//! # Orders (forwarded to /orders)
//! POST /api/orders/checkout        - Place order
//! GET  /api/orders                 - Order history
//! GET  /api/orders/{order_no}      - Order detail
//! ```

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod orders;
pub mod products;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/me", get(auth::me))
        .route("/logout", post(auth::logout))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/items", post(cart::add_item))
        .route(
            "/items/{id}",
            axum::routing::patch(cart::update_item).delete(cart::remove_item),
        )
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/checkout", post(orders::checkout))
        .route("/", get(orders::index))
        .route("/{order_no}", get(orders::show))
}

/// Create all routes for the storefront gateway.
pub fn routes() -> Router<AppState> {
    let api = Router::new()
        .nest("/auth", auth_routes())
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .route("/checkout/summary", get(checkout::summary))
        .nest("/orders", order_routes());

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .nest("/api", api)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies upstream connectivity before returning OK.
/// Returns 503 Service Unavailable if the upstream is not reachable.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.upstream().ping().await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
