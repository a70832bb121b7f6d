#![cfg(feature = "storage-rocksdb")]

mod common;

use axum::http::{Method, StatusCode};
use common::{app_with_store, send};
use order_service::infrastructure::rocksdb::RocksDbDocumentStore;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;

#[tokio::test]
async fn test_rocksdb_persistence_recovery() {
    let dir = tempdir().unwrap();

    // 1. First run: create a customer and an order
    let order = {
        let store = RocksDbDocumentStore::open(dir.path()).unwrap();
        let app = app_with_store(Arc::new(store), Duration::ZERO);
        let customer_id = common::create_customer(&app).await;
        let order = common::create_order(&app, &customer_id).await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/payments",
            Some(json!({"orderId": order["_id"]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        order
    };

    // 2. Second run over the same path sees the paid order
    let store = RocksDbDocumentStore::open(dir.path()).unwrap();
    let app = app_with_store(Arc::new(store), Duration::ZERO);
    let (status, orders) = send(&app, Method::GET, "/orders", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders.as_array().unwrap().len(), 1);
    assert_eq!(orders[0]["_id"], order["_id"]);
    assert_eq!(orders[0]["status"], "completed");
}
