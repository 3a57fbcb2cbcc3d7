//! Task entity and related value types.

use super::{Deadline, ParsePriorityError, TaskId, TaskTitle};
use crate::identity::domain::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority.
///
/// Stored under the variant names `High`, `Medium` and `Low`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Most urgent.
    High,
    /// Default priority for new tasks.
    #[default]
    Medium,
    /// Least urgent.
    Low,
}

impl Priority {
    /// All priorities, most urgent first.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Returns the stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Returns the sort weight: High=3, Medium=2, Low=1.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == value)
            .ok_or_else(|| ParsePriorityError(value.to_owned()))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task owned by a single user, as last seen in a store snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    deadline: Deadline,
    priority: Priority,
    completed: bool,
    owner_id: UserId,
}

/// Parameter object for reconstructing a stored task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Stored title.
    pub title: String,
    /// Stored description, possibly empty.
    pub description: String,
    /// Stored deadline.
    pub deadline: Deadline,
    /// Stored priority.
    pub priority: Priority,
    /// Stored completion flag.
    pub completed: bool,
    /// Identity of the owning user.
    pub owner_id: UserId,
}

impl Task {
    /// Reconstructs a task from stored data.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            deadline: data.deadline,
            priority: data.priority,
            completed: data.completed,
            owner_id: data.owner_id,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> Deadline {
        self.deadline
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the owning user's identity.
    #[must_use]
    pub const fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// Returns whether the lowercase title or description contains
    /// `lowercase_needle`. The needle must already be lowercase.
    #[must_use]
    pub fn contains_lowercase(&self, lowercase_needle: &str) -> bool {
        self.title.to_lowercase().contains(lowercase_needle)
            || self.description.to_lowercase().contains(lowercase_needle)
    }
}

/// Renders the list row: `title | description | deadline | priority`.
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.title, self.description, self.deadline, self.priority
        )
    }
}

/// A task that has not been stored yet.
///
/// New tasks always start incomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: TaskTitle,
    description: String,
    deadline: Deadline,
    priority: Priority,
    owner_id: UserId,
}

impl NewTask {
    /// Creates a new task for `owner_id` with an empty description and
    /// default priority.
    #[must_use]
    pub fn new(title: TaskTitle, deadline: Deadline, owner_id: UserId) -> Self {
        Self {
            title,
            description: String::new(),
            deadline,
            priority: Priority::default(),
            owner_id,
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

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> Deadline {
        self.deadline
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the owner identity.
    #[must_use]
    pub const fn owner_id(&self) -> &UserId {
        &self.owner_id
    }
}
