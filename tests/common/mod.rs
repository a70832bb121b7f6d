#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use order_service::domain::id::RecordId;
use order_service::domain::ports::{Collection, Document, DocumentStore, SharedDocumentStore};
use order_service::error::{Result, ServiceError};
use order_service::infrastructure::in_memory::InMemoryDocumentStore;
use order_service::interfaces::http::{AppState, router};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

/// App over a fresh in-memory store with no processing delay.
pub fn app() -> Router {
    app_with_store(Arc::new(InMemoryDocumentStore::new()), Duration::ZERO)
}

pub fn app_with_delay(delay: Duration) -> Router {
    app_with_store(Arc::new(InMemoryDocumentStore::new()), delay)
}

pub fn app_with_store(store: SharedDocumentStore, delay: Duration) -> Router {
    router(AppState::new(store, delay))
}

/// Sends one request and returns the status with the JSON body
/// (`Value::Null` when the body is empty or not JSON).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn create_customer(app: &Router) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/customers",
        Some(json!({"name": "A", "email": "a@x.com", "address": "1 Main St"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["_id"].as_str().unwrap().to_string()
}

pub async fn create_order(app: &Router, customer_id: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/orders",
        Some(json!({"customerId": customer_id, "items": ["Switch"], "totalAmount": 299.99})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

pub fn unknown_id() -> String {
    RecordId::generate().to_string()
}

/// A store whose backend is unreachable: every call fails.
pub struct FailingStore;

fn unreachable_backend() -> ServiceError {
    ServiceError::Io(std::io::Error::other("connection refused"))
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn create(&self, _collection: Collection, _fields: Document) -> Result<Document> {
        Err(unreachable_backend())
    }

    async fn find(&self, _collection: Collection) -> Result<Vec<Document>> {
        Err(unreachable_backend())
    }

    async fn find_by_id_and_update(
        &self,
        _collection: Collection,
        _id: RecordId,
        _changes: Document,
    ) -> Result<Option<Document>> {
        Err(unreachable_backend())
    }

    async fn find_by_id_and_delete(
        &self,
        _collection: Collection,
        _id: RecordId,
    ) -> Result<Option<Document>> {
        Err(unreachable_backend())
    }
}

pub fn failing_app() -> Router {
    app_with_store(Arc::new(FailingStore), Duration::ZERO)
}
