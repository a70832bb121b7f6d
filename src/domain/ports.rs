use super::id::RecordId;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// A schemaless stored record: a JSON object keyed by field name.
pub type Document = Map<String, Value>;

/// Name of the field holding a document's identifier.
pub const ID_FIELD: &str = "_id";

/// The collections the service persists into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Items,
    Customers,
    Orders,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Items, Collection::Customers, Collection::Orders];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Items => "items",
            Collection::Customers => "customers",
            Collection::Orders => "orders",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port to the document store backing every resource.
///
/// Each call is atomic for the single document it touches. Nothing is
/// coordinated across calls.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Stores `fields` under a freshly generated id and returns the stored
    /// document, `_id` included.
    async fn create(&self, collection: Collection, fields: Document) -> Result<Document>;

    /// Returns every document in the collection.
    async fn find(&self, collection: Collection) -> Result<Vec<Document>>;

    /// Merges `changes` into the document with the given id and returns the
    /// updated document, or `None` when no document has that id.
    async fn find_by_id_and_update(
        &self,
        collection: Collection,
        id: RecordId,
        changes: Document,
    ) -> Result<Option<Document>>;

    /// Removes the document with the given id, returning it if it existed.
    async fn find_by_id_and_delete(
        &self,
        collection: Collection,
        id: RecordId,
    ) -> Result<Option<Document>>;
}

pub type SharedDocumentStore = Arc<dyn DocumentStore>;

/// Merges `changes` into `document`, never overwriting its `_id`.
pub fn merge(document: &mut Document, changes: Document) {
    for (field, value) in changes {
        if field != ID_FIELD {
            document.insert(field, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_keeps_id_and_untouched_fields() {
        let mut document = json!({"_id": "a", "name": "Switch", "description": "Console"})
            .as_object()
            .cloned()
            .unwrap();
        let changes = json!({"_id": "b", "name": "Switch OLED"})
            .as_object()
            .cloned()
            .unwrap();

        merge(&mut document, changes);

        assert_eq!(document["_id"], "a");
        assert_eq!(document["name"], "Switch OLED");
        assert_eq!(document["description"], "Console");
    }
}
