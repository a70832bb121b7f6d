use crate::domain::id::RecordId;
use crate::domain::ports::{Collection, Document, DocumentStore, ID_FIELD, merge};
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory document store.
///
/// Each collection is a list of `(id, document)` pairs kept in insertion
/// order, so `find` returns documents in the order they were created.
/// Uses `Arc<RwLock<..>>` so clones share the same data.
#[derive(Default, Clone)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<HashMap<Collection, Vec<(RecordId, Document)>>>>,
}

impl InMemoryDocumentStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn create(&self, collection: Collection, mut fields: Document) -> Result<Document> {
        let id = RecordId::generate();
        fields.insert(ID_FIELD.to_string(), Value::String(id.to_string()));

        let mut collections = self.collections.write().await;
        collections
            .entry(collection)
            .or_default()
            .push((id, fields.clone()));
        Ok(fields)
    }

    async fn find(&self, collection: Collection) -> Result<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map(|documents| documents.iter().map(|(_, doc)| doc.clone()).collect())
            .unwrap_or_default())
    }

    async fn find_by_id_and_update(
        &self,
        collection: Collection,
        id: RecordId,
        changes: Document,
    ) -> Result<Option<Document>> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(&collection) else {
            return Ok(None);
        };
        Ok(documents
            .iter_mut()
            .find(|(key, _)| *key == id)
            .map(|(_, document)| {
                merge(document, changes);
                document.clone()
            }))
    }

    async fn find_by_id_and_delete(
        &self,
        collection: Collection,
        id: RecordId,
    ) -> Result<Option<Document>> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(&collection) else {
            return Ok(None);
        };
        Ok(documents
            .iter()
            .position(|(key, _)| *key == id)
            .map(|index| documents.remove(index).1))
    }
}
