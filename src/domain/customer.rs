use super::cast;
use super::id::RecordId;
use super::model::{Model, SchemaErrors, to_document};
use super::ports::{Collection, Document};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    #[serde(rename = "_id")]
    #[schema(value_type = String, example = "0195d4cc-6fdb-7dd8-4a30-f76790a1b2c3")]
    pub id: RecordId,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane.doe@example.com")]
    pub email: String,
    #[schema(example = "80 Lincoln Ave, PA")]
    pub address: String,
}

/// Customer payload. Every field is required on create; updates only touch
/// the fields that are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerFields {
    #[serde(
        default,
        deserialize_with = "cast::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "cast::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(example = "jane.doe@example.com")]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "cast::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(example = "80 Lincoln Ave, PA")]
    pub address: Option<String>,
}

impl Model for Customer {
    const NAME: &'static str = "Customer";
    const COLLECTION: Collection = Collection::Customers;

    type Draft = CustomerFields;
    type Changes = CustomerFields;

    fn validate_draft(draft: CustomerFields) -> Result<Document> {
        let mut errors = SchemaErrors::new(Self::NAME);
        let draft = CustomerFields {
            name: errors.require_text("name", draft.name),
            email: errors.require_text("email", draft.email),
            address: errors.require_text("address", draft.address),
        };
        errors.finish()?;
        to_document(&draft)
    }

    fn validate_changes(changes: CustomerFields) -> Result<Document> {
        to_document(&changes)
    }
}
