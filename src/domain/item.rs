use super::cast;
use super::id::RecordId;
use super::model::{Model, to_document};
use super::ports::{Collection, Document};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalogue entry. Neither field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    #[serde(rename = "_id")]
    #[schema(value_type = String, example = "0195d4e2-7e21-7665-9571-5e81c14a2b3c")]
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Nintendo Switch")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "The World's Most Popular Gaming Console")]
    pub description: Option<String>,
}

/// Item payload for create, update and replace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemFields {
    #[serde(
        default,
        deserialize_with = "cast::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(example = "Nintendo Switch")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "cast::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(example = "The World's Most Popular Gaming Console")]
    pub description: Option<String>,
}

impl Model for Item {
    const NAME: &'static str = "Item";
    const COLLECTION: Collection = Collection::Items;

    type Draft = ItemFields;
    type Changes = ItemFields;

    fn validate_draft(draft: ItemFields) -> Result<Document> {
        to_document(&draft)
    }

    fn validate_changes(changes: ItemFields) -> Result<Document> {
        to_document(&changes)
    }
}
