use crate::config::Collection;

/// Errors raised by a [`KeyValueStorage`](crate::storage::KeyValueStorage) backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The write would exceed the origin's storage capacity.
    #[error("storage quota exceeded while writing {key}")]
    QuotaExceeded { key: String },

    /// Storage is disabled or the backend failed for another reason.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for storage backend operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors returned by [`ContentStore`](crate::store::ContentStore) mutations.
///
/// `Persist` and `Encode` mean the in-memory collection was already updated
/// and only the write-back failed. `DuplicateId` is raised before anything
/// changes.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{collection} already has a record with id {id}")]
    DuplicateId { collection: Collection, id: String },

    #[error("failed to save {collection}: {source}")]
    Persist {
        collection: Collection,
        #[source]
        source: StorageError,
    },

    #[error("failed to encode {collection}: {source}")]
    Encode {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// The collection the failed mutation targeted.
    pub fn collection(&self) -> Collection {
        match self {
            StoreError::DuplicateId { collection, .. }
            | StoreError::Persist { collection, .. }
            | StoreError::Encode { collection, .. } => *collection,
        }
    }

    /// Notice suitable for showing to the person editing the site.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::DuplicateId { collection, id } => {
                format!("The {} already has an entry with id {}.", collection, id)
            }
            _ => self.collection().write_failure_message(),
        }
    }
}

/// Result alias for store mutations.
pub type StoreResult<T> = Result<T, StoreError>;
