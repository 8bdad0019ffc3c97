//! End-to-end tests for the storefront gateway forwarding contract.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    body::Bytes,
    extract::Query,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};

use posy_integration_tests::{dead_upstream, spawn, spawn_storefront};
use posy_storefront::upstream::MAX_BODY_BYTES;

#[tokio::test]
async fn health_endpoints_respond() {
    let upstream = spawn(Router::new()).await;
    let gateway = spawn_storefront(&upstream).await;

    let resp = reqwest::get(format!("{gateway}/health"))
        .await
        .expect("health request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("body"), "ok");

    let resp = reqwest::get(format!("{gateway}/health/ready"))
        .await
        .expect("readiness request failed");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn readiness_fails_when_upstream_is_down() {
    let gateway = spawn_storefront(&dead_upstream().await).await;

    let resp = reqwest::get(format!("{gateway}/health/ready"))
        .await
        .expect("readiness request failed");
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn json_reply_passes_through_with_cookies() {
    let upstream = spawn(Router::new().route(
        "/auth/login",
        post(|| async {
            (
                StatusCode::OK,
                [(header::SET_COOKIE, "sid=abc123; HttpOnly; Path=/")],
                Json(json!({ "ok": true, "user": { "id": 1, "email": "kim@posy.shop" } })),
            )
        }),
    ))
    .await;
    let gateway = spawn_storefront(&upstream).await;

    let resp = reqwest::Client::new()
        .post(format!("{gateway}/api/auth/login"))
        .json(&json!({ "email": "kim@posy.shop", "password": "hunter2!" }))
        .send()
        .await
        .expect("login request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie missing")
        .to_str()
        .expect("cookie value");
    assert!(cookie.starts_with("sid=abc123"));

    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["ok"], true);
    assert_eq!(body["user"]["email"], "kim@posy.shop");
}

#[tokio::test]
async fn upstream_error_status_passes_through() {
    let upstream = spawn(Router::new().route(
        "/products/{id}",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "ok": false, "message": "product not found" })),
            )
        }),
    ))
    .await;
    let gateway = spawn_storefront(&upstream).await;

    let resp = reqwest::get(format!("{gateway}/api/products/999"))
        .await
        .expect("product request failed");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["message"], "product not found");
}

#[tokio::test]
async fn non_json_reply_is_wrapped_with_status_preserved() {
    let upstream = spawn(Router::new().route(
        "/cart",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "upstream maintenance") }),
    ))
    .await;
    let gateway = spawn_storefront(&upstream).await;

    let resp = reqwest::get(format!("{gateway}/api/cart"))
        .await
        .expect("cart request failed");

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["ok"], false);
    assert_eq!(body["message"], "upstream maintenance");
}

#[tokio::test]
async fn empty_non_json_reply_gets_fixed_message() {
    let upstream = spawn(
        Router::new().route("/cart", get(|| async { StatusCode::BAD_GATEWAY })),
    )
    .await;
    let gateway = spawn_storefront(&upstream).await;

    let resp = reqwest::get(format!("{gateway}/api/cart"))
        .await
        .expect("cart request failed");

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["message"], "Upstream returned non-JSON response");
}

#[tokio::test]
async fn unreachable_upstream_yields_502_envelope() {
    let gateway = spawn_storefront(&dead_upstream().await).await;

    let resp = reqwest::get(format!("{gateway}/api/products"))
        .await
        .expect("product request failed");

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["ok"], false);
    assert_eq!(body["message"], "Failed to reach upstream API");
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn request_body_and_headers_are_forwarded() {
    let upstream = spawn(Router::new().route(
        "/cart/items",
        post(|headers: HeaderMap, body: Bytes| async move {
            Json(json!({
                "received": String::from_utf8_lossy(&body),
                "customHeader": headers
                    .get("x-client-version")
                    .and_then(|v| v.to_str().ok()),
            }))
            .into_response()
        }),
    ))
    .await;
    let gateway = spawn_storefront(&upstream).await;

    let resp = reqwest::Client::new()
        .post(format!("{gateway}/api/cart/items"))
        .header("x-client-version", "web-1.4.2")
        .json(&json!({ "productId": 7, "quantity": 2 }))
        .send()
        .await
        .expect("add-to-cart request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("json body");
    let received: Value = serde_json::from_str(body["received"].as_str().expect("received"))
        .expect("forwarded body is json");
    assert_eq!(received["productId"], 7);
    assert_eq!(received["quantity"], 2);
    assert_eq!(body["customHeader"], "web-1.4.2");
}

#[tokio::test]
async fn query_string_passes_through() {
    let upstream = spawn(Router::new().route(
        "/products",
        get(
            |Query(params): Query<std::collections::HashMap<String, String>>| async move {
                Json(json!({ "q": params.get("q") }))
            },
        ),
    ))
    .await;
    let gateway = spawn_storefront(&upstream).await;

    let resp = reqwest::get(format!("{gateway}/api/products?q=장미"))
        .await
        .expect("search request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["q"], "장미");
}

#[tokio::test]
async fn checkout_summary_computes_totals() {
    let upstream = spawn(Router::new().route(
        "/cart",
        get(|| async {
            Json(json!({
                "items": [
                    {
                        "cart_item_id": 1, "quantity": 2, "product_id": 7,
                        "name": "장미 꽃다발", "price": 12000, "sale_price": 9900,
                        "stock": 10, "thumbnail_url": null
                    },
                    {
                        "cart_item_id": 2, "quantity": 1, "product_id": 9,
                        "name": "포장 리본", "price": 0, "sale_price": null,
                        "stock": 50, "thumbnail_url": null
                    }
                ]
            }))
        }),
    ))
    .await;
    let gateway = spawn_storefront(&upstream).await;

    let resp = reqwest::get(format!("{gateway}/api/checkout/summary"))
        .await
        .expect("summary request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["itemCount"], 3);
    assert_eq!(body["itemsTotal"], 19_800);
    assert_eq!(body["shippingFee"], 3_000);
    assert_eq!(body["grandTotal"], 22_800);
}

#[tokio::test]
async fn checkout_summary_requires_login() {
    let upstream = spawn(Router::new().route(
        "/cart",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "ok": false, "message": "no session" })),
            )
        }),
    ))
    .await;
    let gateway = spawn_storefront(&upstream).await;

    let resp = reqwest::get(format!("{gateway}/api/checkout/summary"))
        .await
        .expect("summary request failed");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["ok"], false);
    assert_eq!(body["message"], "Login required");
}

#[tokio::test]
async fn checkout_summary_relays_upstream_error_body() {
    let upstream = spawn(Router::new().route(
        "/cart",
        get(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "ok": false, "message": "점검 중입니다" })),
            )
        }),
    ))
    .await;
    let gateway = spawn_storefront(&upstream).await;

    let resp = reqwest::get(format!("{gateway}/api/checkout/summary"))
        .await
        .expect("summary request failed");

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["ok"], false);
    assert_eq!(body["message"], "점검 중입니다");
}

#[tokio::test]
async fn oversized_request_body_is_rejected_before_forwarding() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let upstream = spawn(Router::new().route(
        "/cart/items",
        post(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!({ "ok": true }))
            }
        }),
    ))
    .await;
    let gateway = spawn_storefront(&upstream).await;

    let resp = reqwest::Client::new()
        .post(format!("{gateway}/api/cart/items"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(vec![b'x'; MAX_BODY_BYTES + 1])
        .send()
        .await
        .expect("add-to-cart request failed");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["ok"], false);
    assert_eq!(body["message"], "Request body too large or unreadable");
    assert_eq!(hits.load(Ordering::SeqCst), 0, "upstream saw the request");
}

#[tokio::test]
async fn order_detail_is_forwarded_by_order_number() {
    let upstream = spawn(Router::new().route(
        "/orders/{order_no}",
        get(
            |axum::extract::Path(order_no): axum::extract::Path<String>| async move {
                Json(json!({ "order": { "orderNo": order_no }, "items": [] }))
            },
        ),
    ))
    .await;
    let gateway = spawn_storefront(&upstream).await;

    let resp = reqwest::get(format!("{gateway}/api/orders/ORD-20250114-0042"))
        .await
        .expect("order request failed");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("json body");
    assert_eq!(body["order"]["orderNo"], "ORD-20250114-0042");
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let upstream = spawn(Router::new()).await;
    let gateway = spawn_storefront(&upstream).await;

    let resp = reqwest::get(format!("{gateway}/health"))
        .await
        .expect("health request failed");
    assert!(resp.headers().contains_key("x-request-id"));

    let resp = reqwest::Client::new()
        .get(format!("{gateway}/health"))
        .header("x-request-id", "trace-me-123")
        .send()
        .await
        .expect("health request failed");
    assert_eq!(
        resp.headers().get("x-request-id").expect("request id"),
        "trace-me-123"
    );
}
