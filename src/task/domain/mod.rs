//! Domain model for personal tasks.
//!
//! Tasks are owned by one user and identified by the document store. The
//! only real logic lives in [`TaskListView`], which sorts, filters and
//! partitions a snapshot for display.

mod deadline;
mod error;
mod ids;
mod task;
mod view;

pub use deadline::Deadline;
pub use error::{ParsePriorityError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use task::{NewTask, PersistedTaskData, Priority, Task};
pub use view::{TaskListView, compare_tasks};
