//! Task list screen controller.

use super::Navigation;
use crate::identity::{domain::Session, ports::IdentityProvider, services::SessionService};
use crate::store::ports::DocumentStore;
use crate::task::{
    domain::{Deadline, Priority, TaskId, TaskListView},
    services::{AddTaskRequest, TaskListResult, TaskListViewModel},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Modal form for adding a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskForm {
    title: String,
    description: String,
    priority: Priority,
    deadline: Deadline,
    visible: bool,
}

impl AddTaskForm {
    /// Creates a hidden, empty form whose deadline defaults to `today`.
    #[must_use]
    pub fn new(today: Deadline) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Priority::default(),
            deadline: today,
            visible: false,
        }
    }

    /// Returns the title input.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description input.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the selected priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the selected deadline.
    #[must_use]
    pub const fn deadline(&self) -> Deadline {
        self.deadline
    }

    /// Returns `true` while the form is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Replaces the title input.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the description input.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Selects a priority.
    pub const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    /// Selects a deadline.
    pub const fn set_deadline(&mut self, deadline: Deadline) {
        self.deadline = deadline;
    }

    fn request(&self) -> AddTaskRequest {
        AddTaskRequest::new(self.title.as_str(), self.deadline)
            .with_description(self.description.as_str())
            .with_priority(self.priority)
    }
}

/// The signed-in user's task list with search, add form and logout.
///
/// Write failures are logged and otherwise dropped; the list only changes
/// when the store pushes a snapshot.
pub struct HomeScreen<S, P, C>
where
    S: DocumentStore,
    P: IdentityProvider,
    C: Clock + Send + Sync,
{
    tasks: TaskListViewModel<S>,
    sessions: SessionService<P, C>,
    search_text: String,
    form: AddTaskForm,
}

impl<S, P, C> HomeScreen<S, P, C>
where
    S: DocumentStore,
    P: IdentityProvider,
    C: Clock + Send + Sync,
{
    /// Creates the screen for `session`. Call [`Self::mount`] to start
    /// receiving tasks.
    #[must_use]
    pub fn new(store: Arc<S>, sessions: SessionService<P, C>, session: Session) -> Self {
        let form = AddTaskForm::new(Deadline::today(sessions.clock()));
        Self {
            tasks: TaskListViewModel::new(store, session),
            sessions,
            search_text: String::new(),
            form,
        }
    }

    /// Reads tasks from `collection` instead of the default one.
    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.tasks = self.tasks.with_collection(collection);
        self
    }

    /// Returns the session shown by this screen.
    #[must_use]
    pub const fn session(&self) -> &Session {
        self.tasks.session()
    }

    /// Opens the live subscription to the user's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::Subscribe`](crate::task::services::TaskListError::Subscribe)
    /// when the store refuses the query.
    pub async fn mount(&mut self) -> TaskListResult<()> {
        self.tasks.subscribe().await
    }

    /// Releases the live subscription.
    pub fn unmount(&mut self) {
        self.tasks.unsubscribe();
    }

    /// Returns `true` while the live subscription is open.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.tasks.is_subscribed()
    }

    /// Waits until the store pushes the next snapshot and applies it.
    ///
    /// Returns `false` when the screen is not mounted or the store ended the
    /// subscription.
    pub async fn wait_for_update(&mut self) -> bool {
        self.tasks.next_snapshot().await.is_some()
    }

    /// Applies the newest snapshot if one arrived since the last update.
    /// Returns `true` if the list changed.
    pub fn refresh(&mut self) -> bool {
        self.tasks.apply_latest_snapshot()
    }

    /// Returns the search input.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Replaces the search input.
    pub fn set_search_text(&mut self, search_text: impl Into<String>) {
        self.search_text = search_text.into();
    }

    /// Derives the sections to display for the current search input.
    #[must_use]
    pub fn view(&self) -> TaskListView {
        self.tasks.derived_view(&self.search_text)
    }

    /// Returns the add-task form.
    #[must_use]
    pub const fn form(&self) -> &AddTaskForm {
        &self.form
    }

    /// Returns the add-task form for editing.
    pub const fn form_mut(&mut self) -> &mut AddTaskForm {
        &mut self.form
    }

    /// Shows the add-task form.
    pub const fn open_form(&mut self) {
        self.form.visible = true;
    }

    /// Hides the add-task form, keeping its inputs.
    pub const fn cancel_form(&mut self) {
        self.form.visible = false;
    }

    /// Submits the add-task form.
    ///
    /// A blank title leaves the form untouched. After a successful write the
    /// form is reset to its defaults and closed.
    pub async fn submit_form(&mut self) {
        match self.tasks.add(self.form.request()).await {
            Ok(Some(task_id)) => {
                debug!(task_id = %task_id, "task added");
                self.form = AddTaskForm::new(Deadline::today(self.sessions.clock()));
            }
            Ok(None) => {}
            Err(err) => warn!(error = %err, "task could not be added"),
        }
    }

    /// Handles a tap on a task row by flipping its completion flag.
    pub async fn toggle_task(&self, task_id: &TaskId, completed: bool) {
        if let Err(err) = self.tasks.toggle_complete(task_id, completed).await {
            warn!(error = %err, task_id = %task_id, "task could not be updated");
        }
    }

    /// Handles a tap on a task's delete control.
    pub async fn delete_task(&self, task_id: &TaskId) {
        if let Err(err) = self.tasks.delete(task_id).await {
            warn!(error = %err, task_id = %task_id, "task could not be deleted");
        }
    }

    /// Signs the user out.
    ///
    /// On success the subscription is released and the login screen is
    /// shown. On failure the user stays signed in on this screen.
    pub async fn logout(&mut self) -> Navigation {
        match self.sessions.sign_out(self.tasks.session()).await {
            Ok(()) => {
                self.tasks.unsubscribe();
                Navigation::Login
            }
            Err(err) => {
                error!(error = %err, "sign-out failed");
                Navigation::Stay
            }
        }
    }
}
