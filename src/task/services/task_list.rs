//! Task list view-model: the live snapshot of a user's tasks plus the
//! add/toggle/delete intents that change it.

use crate::identity::domain::Session;
use crate::store::{
    domain::Snapshot,
    ports::{DocumentStore, LiveQuery, StoreError},
};
use crate::task::{
    adapters::document::{
        TASKS_COLLECTION, TaskDocument, TaskDocumentError, completion_fields, decode_task,
        owner_filter,
    },
    domain::{Deadline, NewTask, Priority, Task, TaskId, TaskListView, TaskTitle},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for adding a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    title: String,
    description: String,
    deadline: Deadline,
    priority: Priority,
}

impl AddTaskRequest {
    /// Creates a request with an empty description and default priority.
    #[must_use]
    pub fn new(title: impl Into<String>, deadline: Deadline) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            deadline,
            priority: Priority::default(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Errors raised by the task list view-model.
#[derive(Debug, Error)]
pub enum TaskListError {
    /// The store rejected a create, update or delete.
    #[error("task write failed: {0}")]
    Write(#[source] StoreError),

    /// The live query could not be opened.
    #[error("failed to open task subscription: {0}")]
    Subscribe(#[source] StoreError),

    /// A task could not be encoded for the store.
    #[error(transparent)]
    Document(#[from] TaskDocumentError),
}

/// Result type for task list operations.
pub type TaskListResult<T> = Result<T, TaskListError>;

/// Holds the signed-in user's current tasks and issues changes to them.
///
/// Mutations never touch the local collection. The displayed tasks change
/// only when the store pushes the next snapshot, which replaces the whole
/// collection.
pub struct TaskListViewModel<S>
where
    S: DocumentStore,
{
    store: Arc<S>,
    session: Session,
    collection: String,
    tasks: Vec<Task>,
    live_query: Option<LiveQuery>,
}

impl<S> TaskListViewModel<S>
where
    S: DocumentStore,
{
    /// Creates a view-model for `session` over the default tasks collection.
    #[must_use]
    pub fn new(store: Arc<S>, session: Session) -> Self {
        Self {
            store,
            session,
            collection: TASKS_COLLECTION.to_owned(),
            tasks: Vec::new(),
            live_query: None,
        }
    }

    /// Uses `collection` instead of the default tasks collection.
    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Returns the session whose tasks are shown.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the tasks from the latest snapshot, unsorted.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns `true` while a live query is open.
    #[must_use]
    pub const fn is_subscribed(&self) -> bool {
        self.live_query.is_some()
    }

    /// Opens the live query for the session owner's tasks.
    ///
    /// An already open query is closed first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Subscribe`] when the store refuses the query.
    pub async fn subscribe(&mut self) -> TaskListResult<()> {
        self.unsubscribe();
        let filter = owner_filter(self.session.user_id());
        let live_query = self
            .store
            .subscribe(&self.collection, filter)
            .await
            .map_err(TaskListError::Subscribe)?;
        info!(
            user_id = %self.session.user_id(),
            collection = %self.collection,
            "task subscription opened"
        );
        self.live_query = Some(live_query);
        Ok(())
    }

    /// Closes the live query. Safe to call when none is open.
    pub fn unsubscribe(&mut self) {
        if let Some(mut live_query) = self.live_query.take() {
            live_query.close();
            info!(user_id = %self.session.user_id(), "task subscription closed");
        }
    }

    /// Waits for the next snapshot and makes it the current collection.
    ///
    /// Returns `None` when no query is open or the store ended it.
    pub async fn next_snapshot(&mut self) -> Option<&[Task]> {
        let snapshot = self.live_query.as_mut()?.next_snapshot().await;
        if let Some(snapshot) = snapshot {
            self.apply_snapshot(snapshot);
            Some(&self.tasks)
        } else {
            self.live_query = None;
            None
        }
    }

    /// Applies the newest snapshot if the store has one the view-model has
    /// not seen yet, without waiting. Returns `true` if one was applied.
    pub fn apply_latest_snapshot(&mut self) -> bool {
        let latest = self
            .live_query
            .as_mut()
            .and_then(LiveQuery::try_next_snapshot);
        latest.map(|snapshot| self.apply_snapshot(snapshot)).is_some()
    }

    /// Replaces the current collection with `snapshot`.
    ///
    /// Documents that are not valid tasks are skipped.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        self.tasks = snapshot
            .documents()
            .iter()
            .filter_map(|document| {
                decode_task(document)
                    .inspect_err(|err| warn!(error = %err, "skipping malformed task document"))
                    .ok()
            })
            .collect();
        debug!(count = self.tasks.len(), "task snapshot applied");
    }

    /// Derives the sorted, filtered and partitioned view for `search_text`.
    #[must_use]
    pub fn derived_view(&self, search_text: &str) -> TaskListView {
        TaskListView::derive(&self.tasks, search_text)
    }

    /// Requests creation of a task owned by the session user.
    ///
    /// A title that is empty after trimming is silently ignored and yields
    /// `Ok(None)`. Otherwise returns the store-assigned identifier. The new
    /// task shows up with the next snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Write`] when the store rejects the create.
    pub async fn add(&self, request: AddTaskRequest) -> TaskListResult<Option<TaskId>> {
        let Ok(title) = TaskTitle::new(request.title) else {
            debug!("ignoring task with an empty title");
            return Ok(None);
        };
        let new_task = NewTask::new(title, request.deadline, self.session.user_id().clone())
            .with_description(request.description)
            .with_priority(request.priority);
        let fields = TaskDocument::from_new_task(&new_task).into_fields()?;

        let id = self
            .store
            .create(&self.collection, fields)
            .await
            .map_err(TaskListError::Write)?;
        Ok(Some(TaskId::from(id)))
    }

    /// Requests `completed = !current_completed` for a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Write`] when the store rejects the update.
    pub async fn toggle_complete(
        &self,
        task_id: &TaskId,
        current_completed: bool,
    ) -> TaskListResult<()> {
        self.store
            .update(
                &self.collection,
                task_id.document_id(),
                completion_fields(!current_completed),
            )
            .await
            .map_err(TaskListError::Write)
    }

    /// Requests deletion of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Write`] when the store rejects the delete.
    pub async fn delete(&self, task_id: &TaskId) -> TaskListResult<()> {
        self.store
            .delete(&self.collection, task_id.document_id())
            .await
            .map_err(TaskListError::Write)
    }
}
