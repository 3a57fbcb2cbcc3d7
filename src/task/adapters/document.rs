//! Document model for task records.

use crate::identity::domain::UserId;
use crate::store::domain::{Document, DocumentId, FieldFilter, Fields};
use crate::task::domain::{Deadline, NewTask, PersistedTaskData, Priority, Task, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Default collection holding task documents.
pub const TASKS_COLLECTION: &str = "tasks";

/// Field holding the owner identity.
pub const OWNER_FIELD: &str = "userId";

/// Field holding the completion flag.
pub const COMPLETED_FIELD: &str = "completed";

/// Stored shape of a task document. The identifier is not a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDocument {
    /// Task title.
    pub title: String,
    /// Task description.
    #[serde(default)]
    pub description: String,
    /// Deadline as `YYYY-MM-DD`.
    pub deadline: Deadline,
    /// `High`, `Medium` or `Low`.
    pub priority: Priority,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
    /// Owner identity.
    #[serde(rename = "userId")]
    pub user_id: UserId,
}

/// Errors raised while mapping tasks to store documents.
#[derive(Debug, Error)]
pub enum TaskDocumentError {
    /// A task could not be serialized into fields.
    #[error("failed to encode task document: {0}")]
    Encode(#[source] serde_json::Error),

    /// A stored document does not have the task shape.
    #[error("document {id} is not a valid task: {source}")]
    Decode {
        /// Offending document.
        id: DocumentId,
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// Encoding produced something other than a field map.
    #[error("task document did not encode to a field map")]
    NotAnObject,
}

impl TaskDocument {
    /// Builds the document for a task about to be created.
    #[must_use]
    pub fn from_new_task(task: &NewTask) -> Self {
        Self {
            title: task.title().as_str().to_owned(),
            description: task.description().to_owned(),
            deadline: task.deadline(),
            priority: task.priority(),
            completed: false,
            user_id: task.owner_id().clone(),
        }
    }

    /// Encodes the document as store fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDocumentError`] when serialization fails.
    pub fn into_fields(self) -> Result<Fields, TaskDocumentError> {
        match serde_json::to_value(self).map_err(TaskDocumentError::Encode)? {
            Value::Object(fields) => Ok(fields),
            _ => Err(TaskDocumentError::NotAnObject),
        }
    }

    /// Decodes a stored document.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDocumentError::Decode`] when a field is missing or has
    /// the wrong shape, including unknown priorities and malformed dates.
    pub fn from_document(document: &Document) -> Result<Self, TaskDocumentError> {
        serde_json::from_value(Value::Object(document.fields().clone())).map_err(|source| {
            TaskDocumentError::Decode {
                id: document.id().clone(),
                source,
            }
        })
    }

    /// Converts the document into a domain task with the given identifier.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task::from_persisted(PersistedTaskData {
            id,
            title: self.title,
            description: self.description,
            deadline: self.deadline,
            priority: self.priority,
            completed: self.completed,
            owner_id: self.user_id,
        })
    }
}

/// Decodes a snapshot document into a task.
///
/// # Errors
///
/// Returns [`TaskDocumentError::Decode`] when the document is not a task.
pub fn decode_task(document: &Document) -> Result<Task, TaskDocumentError> {
    let task_document = TaskDocument::from_document(document)?;
    Ok(task_document.into_task(TaskId::from(document.id().clone())))
}

/// Field update setting the completion flag.
#[must_use]
pub fn completion_fields(completed: bool) -> Fields {
    let mut fields = Fields::new();
    fields.insert(COMPLETED_FIELD.to_owned(), Value::Bool(completed));
    fields
}

/// Live query filter selecting the tasks owned by `owner`.
#[must_use]
pub fn owner_filter(owner: &UserId) -> FieldFilter {
    FieldFilter::equals(OWNER_FIELD, owner.clone())
}
