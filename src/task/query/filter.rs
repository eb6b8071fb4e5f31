//! Conjunctive task filter.

use chrono::NaiveDate;

use super::{AssigneeFilter, DueBucket, PriorityFilter};
use crate::task::domain::Task;

/// Search text plus priority, assignee, and due-date criteria.
///
/// All active criteria must hold. The default filter matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    search: String,
    priority: PriorityFilter,
    assignee: AssigneeFilter,
    due: DueBucket,
}

impl TaskFilter {
    /// Creates a filter matching every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the title or description to contain `text`, ignoring case.
    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into().to_lowercase();
        self
    }

    /// Sets the priority criterion.
    #[must_use]
    pub const fn with_priority(mut self, priority: PriorityFilter) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the assignee criterion.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: AssigneeFilter) -> Self {
        self.assignee = assignee;
        self
    }

    /// Sets the due-date bucket.
    #[must_use]
    pub const fn with_due_bucket(mut self, due: DueBucket) -> Self {
        self.due = due;
        self
    }

    /// Returns whether `task` satisfies every criterion on `today`.
    #[must_use]
    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        self.matches_search(task)
            && self.priority.matches(task)
            && self.assignee.matches(task)
            && self.due.matches(task, today)
    }

    fn matches_search(&self, task: &Task) -> bool {
        self.search.is_empty()
            || task.title().to_lowercase().contains(&self.search)
            || task.description().to_lowercase().contains(&self.search)
    }
}

/// Returns the tasks matching `filter`, in input order.
#[must_use]
pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter, today: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task, today))
        .cloned()
        .collect()
}
