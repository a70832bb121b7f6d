use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    /// A record failed its model schema, e.g. a required path was missing.
    #[error("{0}")]
    Validation(String),
    /// An identifier could not be cast to a `RecordId`.
    #[error("Cast to RecordId failed for value \"{0}\"")]
    InvalidId(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[cfg(feature = "storage-rocksdb")]
    #[error("RocksDB error: {0}")]
    RocksDb(#[from] rocksdb::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
