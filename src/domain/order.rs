use super::cast;
use super::id::RecordId;
use super::model::{Model, SchemaErrors, to_document};
use super::ports::{Collection, Document};
use crate::error::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Lifecycle state of an order.
///
/// Only payment moves an order between states on its own (`pending` to
/// `completed`). Any state can still be written through a plain update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => f.write_str("pending"),
            OrderStatus::Completed => f.write_str("completed"),
            OrderStatus::Cancelled => f.write_str("cancelled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    #[schema(value_type = String, example = "0195d4e2-7e21-7665-9571-5e81c14a2b3c")]
    pub id: RecordId,
    /// The customer who placed the order. Not checked for existence.
    #[schema(value_type = String, example = "0195d4cc-6fdb-7dd8-4a30-f76790a1b2c3")]
    pub customer_id: RecordId,
    #[schema(example = json!(["Nintendo Switch"]))]
    pub items: Vec<String>,
    #[schema(example = 299.99)]
    pub total_amount: f64,
    pub status: OrderStatus,
}

/// Order payload for create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderFields {
    #[serde(
        default,
        deserialize_with = "cast::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(example = "0195d4cc-6fdb-7dd8-4a30-f76790a1b2c3")]
    pub customer_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "cast::optional_text_list",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(example = json!(["Nintendo Switch"]))]
    pub items: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "cast::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(example = 299.99)]
    pub total_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl OrderFields {
    /// The write applied when an order is paid for.
    pub fn payment_settled() -> Self {
        Self {
            status: Some(OrderStatus::Completed),
            ..Self::default()
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewOrder {
    customer_id: RecordId,
    items: Vec<String>,
    total_amount: f64,
    status: OrderStatus,
}

fn cast_customer_id(errors: &mut SchemaErrors, raw: String) -> Option<RecordId> {
    match raw.parse::<RecordId>() {
        Ok(id) => Some(id),
        Err(err) => {
            errors.reject("customerId", err);
            None
        }
    }
}

impl Model for Order {
    const NAME: &'static str = "Order";
    const COLLECTION: Collection = Collection::Orders;

    type Draft = OrderFields;
    type Changes = OrderFields;

    fn validate_draft(draft: OrderFields) -> Result<Document> {
        let mut errors = SchemaErrors::new(Self::NAME);
        let customer_id = errors
            .require_text("customerId", draft.customer_id)
            .and_then(|raw| cast_customer_id(&mut errors, raw));
        let items = errors.require("items", draft.items);
        let total_amount = errors.require("totalAmount", draft.total_amount);
        errors.finish()?;

        let (Some(customer_id), Some(items), Some(total_amount)) =
            (customer_id, items, total_amount)
        else {
            return Err(ServiceError::Internal(
                "order schema accepted an incomplete draft".to_string(),
            ));
        };

        to_document(&NewOrder {
            customer_id,
            items,
            total_amount,
            status: draft.status.unwrap_or_default(),
        })
    }

    fn validate_changes(mut changes: OrderFields) -> Result<Document> {
        if let Some(raw) = changes.customer_id.take() {
            let mut errors = SchemaErrors::new(Self::NAME);
            let customer_id = cast_customer_id(&mut errors, raw);
            errors.finish()?;
            changes.customer_id = customer_id.map(|id| id.to_string());
        }
        to_document(&changes)
    }
}
