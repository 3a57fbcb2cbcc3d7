//! Presentation-ready views derived from a task snapshot.

use super::Task;
use std::cmp::Ordering;

/// Orders tasks by priority, most urgent first, then by earliest deadline.
///
/// Tasks equal on both keys compare equal; their relative order in a sorted
/// list is implementation-defined.
#[must_use]
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    b.priority()
        .rank()
        .cmp(&a.priority().rank())
        .then_with(|| a.deadline().cmp(&b.deadline()))
}

/// Sorted, filtered and partitioned view of a task snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListView {
    incomplete: Vec<Task>,
    completed: Vec<Task>,
}

impl TaskListView {
    /// Derives the view for `search_text` from a snapshot.
    ///
    /// Tasks are sorted with [`compare_tasks`], kept when the title or
    /// description contains the search text case-insensitively (an empty
    /// search keeps everything), then split on the completion flag. Both
    /// partitions keep the sorted order.
    #[must_use]
    pub fn derive(tasks: &[Task], search_text: &str) -> Self {
        let mut sorted: Vec<&Task> = tasks.iter().collect();
        sorted.sort_by(|a, b| compare_tasks(a, b));

        let needle = search_text.to_lowercase();
        let (completed, incomplete): (Vec<Task>, Vec<Task>) = sorted
            .into_iter()
            .filter(|task| task.contains_lowercase(&needle))
            .cloned()
            .partition(Task::is_completed);

        Self {
            incomplete,
            completed,
        }
    }

    /// Returns the tasks not yet completed.
    #[must_use]
    pub fn incomplete(&self) -> &[Task] {
        &self.incomplete
    }

    /// Returns the completed tasks.
    #[must_use]
    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    /// Returns the number of tasks across both partitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.incomplete.len() + self.completed.len()
    }

    /// Returns `true` when no task survived the filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.incomplete.is_empty() && self.completed.is_empty()
    }
}
