//! Read-only queries over a snapshot of the task collection.
//!
//! Everything here is a pure function of its inputs: the caller supplies the
//! tasks and the current date, and receives new values back. Nothing reads
//! the clock or touches storage.

mod calendar;
mod criteria;
mod filter;
mod sort;
mod views;

pub use calendar::CalendarMonth;
pub use criteria::{AssigneeFilter, DueBucket, ParseCriterionError, PriorityFilter, SortKey};
pub use filter::{TaskFilter, filter_tasks};
pub use sort::sort_tasks;
pub use views::{KanbanBoard, TaskStats, overdue_tasks};
