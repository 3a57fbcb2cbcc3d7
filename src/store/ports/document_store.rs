//! Document store port: per-record writes and live queries.

use super::LiveQuery;
use crate::store::domain::{DocumentId, FieldFilter, Fields};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for document store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Managed document database contract.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Creates a document in `collection` and returns its store-assigned
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store rejects or cannot accept the
    /// write.
    async fn create(&self, collection: &str, fields: Fields) -> StoreResult<DocumentId>;

    /// Merges `fields` into an existing document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the document does not exist, or
    /// another [`StoreError`] when the write is rejected.
    async fn update(&self, collection: &str, id: &DocumentId, fields: Fields) -> StoreResult<()>;

    /// Deletes a document. Deleting a missing document succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the write is rejected.
    async fn delete(&self, collection: &str, id: &DocumentId) -> StoreResult<()>;

    /// Opens a live query over `collection` restricted by `filter`.
    ///
    /// The returned handle yields the full matching result set whenever it
    /// changes, until the handle is closed or dropped.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the query cannot be opened.
    async fn subscribe(&self, collection: &str, filter: FieldFilter) -> StoreResult<LiveQuery>;
}

/// Errors returned by document store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The addressed document does not exist.
    #[error("document {id} not found in collection {collection}")]
    NotFound {
        /// Collection name.
        collection: String,
        /// Missing document identifier.
        id: DocumentId,
    },

    /// The store refused the operation for the current caller.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The store could not be reached.
    #[error("document store unavailable: {0}")]
    Unavailable(String),

    /// Backend-specific failure.
    #[error("document store error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
