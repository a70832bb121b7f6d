use crate::domain::id::RecordId;
use crate::domain::ports::{Collection, Document, DocumentStore, ID_FIELD, merge};
use crate::error::{Result, ServiceError};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, IteratorMode, Options};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A persistent document store using RocksDB.
///
/// Every collection lives in its own column family, keyed by the 16 raw
/// bytes of the record id and holding the document as JSON. Ids are
/// time-ordered, so iterating a column family lists documents in creation
/// order.
///
/// `Clone` shares the underlying `Arc<DB>`.
#[derive(Clone)]
pub struct RocksDbDocumentStore {
    db: Arc<DB>,
    // Serializes read-modify-write cycles so concurrent updates of one
    // document cannot interleave.
    writes: Arc<Mutex<()>>,
}

impl RocksDbDocumentStore {
    /// Opens or creates a RocksDB instance at `path`, creating one column
    /// family per collection if missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let descriptors = Collection::ALL
            .iter()
            .map(|collection| ColumnFamilyDescriptor::new(collection.as_str(), Options::default()))
            .collect::<Vec<_>>();

        let db = DB::open_cf_descriptors(&opts, path, descriptors)?;

        Ok(Self {
            db: Arc::new(db),
            writes: Arc::new(Mutex::new(())),
        })
    }

    fn handle(&self, collection: Collection) -> Result<&ColumnFamily> {
        self.db.cf_handle(collection.as_str()).ok_or_else(|| {
            ServiceError::Internal(format!("{collection} column family not found"))
        })
    }

    fn load(&self, collection: Collection, id: RecordId) -> Result<Option<Document>> {
        let cf = self.handle(collection)?;
        match self.db.get_cf(cf, id.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn save(&self, collection: Collection, id: RecordId, document: &Document) -> Result<()> {
        let cf = self.handle(collection)?;
        let value = serde_json::to_vec(document)?;
        self.db.put_cf(cf, id.as_bytes(), value)?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for RocksDbDocumentStore {
    async fn create(&self, collection: Collection, mut fields: Document) -> Result<Document> {
        let id = RecordId::generate();
        fields.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
        self.save(collection, id, &fields)?;
        Ok(fields)
    }

    async fn find(&self, collection: Collection) -> Result<Vec<Document>> {
        let cf = self.handle(collection)?;
        let mut documents = Vec::new();
        for entry in self.db.iterator_cf(cf, IteratorMode::Start) {
            let (_key, value) = entry?;
            documents.push(serde_json::from_slice(&value)?);
        }
        Ok(documents)
    }

    async fn find_by_id_and_update(
        &self,
        collection: Collection,
        id: RecordId,
        changes: Document,
    ) -> Result<Option<Document>> {
        let _guard = self.writes.lock().await;
        let Some(mut document) = self.load(collection, id)? else {
            return Ok(None);
        };
        merge(&mut document, changes);
        self.save(collection, id, &document)?;
        Ok(Some(document))
    }

    async fn find_by_id_and_delete(
        &self,
        collection: Collection,
        id: RecordId,
    ) -> Result<Option<Document>> {
        let _guard = self.writes.lock().await;
        let existing = self.load(collection, id)?;
        if existing.is_some() {
            let cf = self.handle(collection)?;
            self.db.delete_cf(cf, id.as_bytes())?;
        }
        Ok(existing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn fields(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_rocksdb_open_creates_column_families() {
        let dir = tempdir().unwrap();
        let store = RocksDbDocumentStore::open(dir.path()).expect("Failed to open RocksDB");

        for collection in Collection::ALL {
            assert!(store.db.cf_handle(collection.as_str()).is_some());
        }
    }

    #[tokio::test]
    async fn test_rocksdb_document_lifecycle() {
        let dir = tempdir().unwrap();
        let store = RocksDbDocumentStore::open(dir.path()).unwrap();

        let first = store
            .create(Collection::Items, fields(json!({"name": "a"})))
            .await
            .unwrap();
        store
            .create(Collection::Items, fields(json!({"name": "b"})))
            .await
            .unwrap();

        let listed = store.find(Collection::Items).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], first);

        let id: RecordId = first[ID_FIELD].as_str().unwrap().parse().unwrap();
        let updated = store
            .find_by_id_and_update(Collection::Items, id, fields(json!({"description": "d"})))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated["name"], "a");
        assert_eq!(updated["description"], "d");

        assert!(store
            .find_by_id_and_delete(Collection::Items, id)
            .await
            .unwrap()
            .is_some());
        assert_eq!(store.find(Collection::Items).await.unwrap().len(), 1);
        assert!(store
            .find_by_id_and_update(Collection::Items, id, fields(json!({"name": "x"})))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_rocksdb_reopen_recovers_documents() {
        let dir = tempdir().unwrap();
        {
            let store = RocksDbDocumentStore::open(dir.path()).unwrap();
            store
                .create(Collection::Customers, fields(json!({"name": "A"})))
                .await
                .unwrap();
        }

        let store = RocksDbDocumentStore::open(dir.path()).unwrap();
        let customers = store.find(Collection::Customers).await.unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0]["name"], "A");
    }
}
