use crate::domain::id::RecordId;
use crate::domain::model::Model;
use crate::domain::ports::{Document, SharedDocumentStore};
use crate::error::Result;
use serde_json::Value;
use std::marker::PhantomData;

/// Typed access to the collection of one model.
///
/// Runs the model schema before anything reaches the store and decodes the
/// stored documents back into records. Identifiers arrive as raw strings
/// from the request path; a malformed one fails the same way a store cast
/// would.
pub struct Repository<M> {
    store: SharedDocumentStore,
    _model: PhantomData<fn() -> M>,
}

impl<M> Clone for Repository<M> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _model: PhantomData,
        }
    }
}

impl<M: Model> Repository<M> {
    pub fn new(store: SharedDocumentStore) -> Self {
        Self {
            store,
            _model: PhantomData,
        }
    }

    pub async fn create(&self, draft: M::Draft) -> Result<M> {
        let fields = M::validate_draft(draft)?;
        let document = self.store.create(M::COLLECTION, fields).await?;
        decode(document)
    }

    pub async fn find_all(&self) -> Result<Vec<M>> {
        self.store
            .find(M::COLLECTION)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    /// Merges `changes` into the record. `Ok(None)` when the id matches
    /// nothing.
    pub async fn update(&self, id: &str, changes: M::Changes) -> Result<Option<M>> {
        let id: RecordId = id.parse()?;
        let fields = M::validate_changes(changes)?;
        self.store
            .find_by_id_and_update(M::COLLECTION, id, fields)
            .await?
            .map(decode)
            .transpose()
    }

    pub async fn delete(&self, id: &str) -> Result<Option<M>> {
        let id: RecordId = id.parse()?;
        self.store
            .find_by_id_and_delete(M::COLLECTION, id)
            .await?
            .map(decode)
            .transpose()
    }
}

fn decode<M: Model>(document: Document) -> Result<M> {
    Ok(serde_json::from_value(Value::Object(document))?)
}
