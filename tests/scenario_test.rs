mod common;

use axum::http::{Method, StatusCode};
use common::{app_with_delay, send};
use serde_json::json;
use std::time::Duration;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn test_customer_order_payment_flow() {
    let app = app_with_delay(Duration::from_secs(3));

    // 1. Customer
    let (status, customer) = send(
        &app,
        Method::POST,
        "/customers",
        Some(json!({"name": "A", "email": "a@x.com", "address": "1 Main St"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let customer_id = customer["_id"].as_str().unwrap();

    // 2. Order
    let (status, order) = send(
        &app,
        Method::POST,
        "/orders",
        Some(json!({"customerId": customer_id, "items": ["Switch"], "totalAmount": 299.99})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["status"], "pending");

    // 3. Payment
    let started = Instant::now();
    let (status, receipt) = send(
        &app,
        Method::POST,
        "/payments",
        Some(json!({"orderId": order["_id"]})),
    )
    .await;
    assert!(started.elapsed() >= Duration::from_secs(3));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(receipt["order"]["status"], "completed");
    assert_eq!(receipt["order"]["customerId"], customer_id);
    assert_eq!(receipt["order"]["totalAmount"].as_f64(), Some(299.99));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = common::app();
    let (status, doc) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["openapi"].as_str().unwrap().starts_with('3'));
    assert_eq!(doc["info"]["title"], "Order Management API");
    assert!(doc["paths"]["/payments"]["post"].is_object());
    assert!(doc["paths"]["/orders/process-order"]["get"].is_object());
    assert!(doc["components"]["securitySchemes"]["bearerAuth"].is_object());
}
