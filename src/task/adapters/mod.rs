//! Adapters between the task domain and the document store.

pub mod document;

pub use document::{TaskDocument, TaskDocumentError};
