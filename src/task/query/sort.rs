//! Stable task ordering.

use std::cmp::Reverse;

use super::SortKey;
use crate::task::domain::Task;

/// Returns a copy of `tasks` ordered by `key`.
///
/// The sort is stable: tasks that compare equal keep their input order.
#[must_use]
pub fn sort_tasks(tasks: &[Task], key: SortKey) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    match key {
        SortKey::Unsorted => {}
        SortKey::Priority => sorted.sort_by_key(|task| Reverse(task.priority().weight())),
        SortKey::DueDate => sorted.sort_by_key(|task| {
            let due = task.due_date();
            (due.is_none(), due)
        }),
    }
    sorted
}
