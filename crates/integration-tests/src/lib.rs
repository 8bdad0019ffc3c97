//! Integration tests for Posy.
//!
//! The tests are self-contained: each one builds a fake upstream commerce
//! API as a plain axum `Router`, serves it on an ephemeral localhost port,
//! points a real gateway router at it, and drives the gateway with
//! `reqwest`. No external services are required.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p posy-integration-tests
//! ```

use std::net::IpAddr;

use axum::Router;

/// Serve a router on an ephemeral localhost port.
///
/// Returns the base URL of the listening server. The server task runs
/// until the test process exits.
///
/// # Panics
///
/// Panics if the listener cannot be bound.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server error");
    });

    format!("http://{addr}")
}

/// Start a storefront gateway pointed at the given upstream base URL.
///
/// # Panics
///
/// Panics if the gateway state or listener cannot be created.
pub async fn spawn_storefront(upstream_base: &str) -> String {
    let config = posy_storefront::config::StorefrontConfig {
        host: localhost(),
        port: 0,
        api_base_url: upstream_base.trim_end_matches('/').to_string(),
        sentry_dsn: None,
        sentry_environment: None,
    };
    let state =
        posy_storefront::state::AppState::new(config).expect("Failed to build storefront state");
    spawn(posy_storefront::app(state)).await
}

/// Start an admin gateway pointed at the given upstream base URL.
///
/// # Panics
///
/// Panics if the gateway state or listener cannot be created.
pub async fn spawn_admin(upstream_base: &str) -> String {
    let config = posy_admin::config::AdminConfig {
        host: localhost(),
        port: 0,
        api_base_url: upstream_base.trim_end_matches('/').to_string(),
        sentry_dsn: None,
        sentry_environment: None,
    };
    let state = posy_admin::state::AppState::new(config).expect("Failed to build admin state");
    spawn(posy_admin::app(state)).await
}

/// Reserve a localhost port and release it, yielding a base URL nothing
/// listens on. Used to exercise the unreachable-upstream path.
///
/// # Panics
///
/// Panics if no port can be reserved.
pub async fn dead_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to reserve port");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{addr}")
}

fn localhost() -> IpAddr {
    IpAddr::from([127, 0, 0, 1])
}
