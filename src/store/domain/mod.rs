//! Value types exchanged with the document store.

mod document;
mod query;

pub use document::{Document, DocumentId, Fields};
pub use query::{FieldFilter, Snapshot};
