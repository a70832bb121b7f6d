//! HTTP interface: one axum router per resource, merged over shared
//! [`AppState`].

pub mod customers;
pub mod docs;
pub mod error;
pub mod extract;
pub mod items;
pub mod orders;
pub mod payments;

use std::time::Duration;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::application::engine::FulfillmentEngine;
use crate::application::repository::Repository;
use crate::domain::customer::Customer;
use crate::domain::item::Item;
use crate::domain::order::Order;
use crate::domain::ports::SharedDocumentStore;

/// State shared by every handler. Cloning is cheap: all fields hold the same
/// `Arc` to the document store.
#[derive(Clone)]
pub struct AppState {
    pub items: Repository<Item>,
    pub customers: Repository<Customer>,
    pub orders: Repository<Order>,
    pub fulfillment: FulfillmentEngine,
}

impl AppState {
    pub fn new(store: SharedDocumentStore, processing_delay: Duration) -> Self {
        let orders = Repository::new(store.clone());
        Self {
            items: Repository::new(store.clone()),
            customers: Repository::new(store),
            fulfillment: FulfillmentEngine::new(orders.clone(), processing_delay),
            orders,
        }
    }
}

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(items::routes())
        .merge(customers::routes())
        .merge(orders::routes())
        .merge(payments::routes())
        .merge(docs::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
