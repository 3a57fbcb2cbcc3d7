//! In-memory document store adapter.

mod document_store;

pub use document_store::InMemoryDocumentStore;
