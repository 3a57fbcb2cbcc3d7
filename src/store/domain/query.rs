//! Live query filters and the snapshots they produce.

use super::{Document, Fields};
use serde_json::Value;

/// Equality filter on a single top-level field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFilter {
    field: String,
    value: Value,
}

impl FieldFilter {
    /// Matches documents whose `field` equals `value`.
    #[must_use]
    pub fn equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Returns the filtered field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the value the field must equal.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Returns whether the given fields satisfy the filter.
    ///
    /// A missing field never matches.
    #[must_use]
    pub fn matches(&self, fields: &Fields) -> bool {
        fields.get(&self.field) == Some(&self.value)
    }
}

/// The complete current result set of a live query.
///
/// Every push replaces the previous snapshot as a whole; snapshots are never
/// deltas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    documents: Vec<Document>,
}

impl Snapshot {
    /// Creates a snapshot from the matching documents.
    #[must_use]
    pub const fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Returns the documents in this snapshot.
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Returns the number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` when the result set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl FromIterator<Document> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
