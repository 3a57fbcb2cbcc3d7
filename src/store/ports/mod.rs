//! Port contracts for document storage.

mod document_store;
mod live_query;

pub use document_store::{DocumentStore, StoreError, StoreResult};
pub use live_query::LiveQuery;
