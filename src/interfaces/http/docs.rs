//! OpenAPI document, generated from the handler annotations and served as
//! JSON at `/api-docs/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use super::error::{ErrorBody, MessageBody};
use super::payments::{PaymentReceipt, PaymentRequest};
use super::{AppState, customers, items, orders, payments};
use crate::domain::customer::{Customer, CustomerFields};
use crate::domain::item::{Item, ItemFields};
use crate::domain::order::{Order, OrderFields, OrderStatus};

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Management API",
        version = "1.0.0",
        description = "Customers, items, orders and payments"
    ),
    paths(
        items::create_item,
        items::list_items,
        items::update_item,
        items::replace_item,
        items::delete_item,
        customers::create_customer,
        customers::update_customer,
        customers::delete_customer,
        orders::create_order,
        orders::list_orders,
        orders::update_order,
        orders::delete_order,
        orders::process_order,
        payments::process_payment,
    ),
    components(schemas(
        Item,
        ItemFields,
        Customer,
        CustomerFields,
        Order,
        OrderFields,
        OrderStatus,
        PaymentRequest,
        PaymentReceipt,
        MessageBody,
        ErrorBody,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "Items", description = "Item management"),
        (name = "Customers", description = "Customer management"),
        (name = "Orders", description = "Order management"),
        (name = "Payments", description = "Payment management"),
    )
)]
pub struct ApiDoc;

/// Declares the `bearerAuth` scheme. Requests are not authenticated.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route(OPENAPI_PATH, get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
