//! Filter and sort criteria, parseable from the strings a UI submits.

use chrono::{Datelike, Days, Months, NaiveDate};
use thiserror::Error;

use crate::identity::domain::UserId;
use crate::task::domain::{Priority, Task};

const WILDCARD: &str = "all";

/// Error returned when a criterion string is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {criterion}: {value}")]
pub struct ParseCriterionError {
    /// Name of the criterion being parsed.
    pub criterion: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseCriterionError {
    fn new(criterion: &'static str, value: &str) -> Self {
        Self {
            criterion,
            value: value.to_owned(),
        }
    }
}

/// Priority criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    /// Any priority.
    #[default]
    All,
    /// Exactly this priority.
    Only(Priority),
}

impl PriorityFilter {
    /// Returns whether `task` satisfies the criterion.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(priority) => task.priority() == priority,
        }
    }
}

impl TryFrom<&str> for PriorityFilter {
    type Error = ParseCriterionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case(WILDCARD) {
            return Ok(Self::All);
        }
        Priority::try_from(value)
            .map(Self::Only)
            .map_err(|_| ParseCriterionError::new("priority filter", value))
    }
}

/// Assignee criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssigneeFilter {
    /// Any assignee, including none.
    #[default]
    All,
    /// Assigned to exactly this member.
    Member(UserId),
}

impl AssigneeFilter {
    /// Returns whether `task` satisfies the criterion.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Member(id) => task.assignee() == Some(id),
        }
    }
}

impl TryFrom<&str> for AssigneeFilter {
    type Error = ParseCriterionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case(WILDCARD) {
            return Ok(Self::All);
        }
        trimmed
            .parse::<u64>()
            .map(|id| Self::Member(UserId::new(id)))
            .map_err(|_| ParseCriterionError::new("assignee filter", value))
    }
}

/// Named due-date range.
///
/// Every bucket except [`DueBucket::All`] excludes tasks without a due date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DueBucket {
    /// Any due date, or none.
    #[default]
    All,
    /// Due today.
    Today,
    /// Due between today and the end of the Sunday-started week.
    Week,
    /// Due between today and the last day of the month.
    Month,
    /// Past due and not done.
    Overdue,
}

impl DueBucket {
    /// Returns whether `task` falls in the bucket on `today`.
    #[must_use]
    pub fn matches(self, task: &Task, today: NaiveDate) -> bool {
        if self == Self::All {
            return true;
        }
        let Some(due) = task.due_date() else {
            return false;
        };
        match self {
            Self::All => true,
            Self::Today => due == today,
            Self::Week => today <= due && week_end(today).is_none_or(|end| due <= end),
            Self::Month => today <= due && month_end(today).is_none_or(|end| due <= end),
            Self::Overdue => task.is_overdue(today),
        }
    }
}

/// `today` plus the days remaining until the next week starts on Sunday.
fn week_end(today: NaiveDate) -> Option<NaiveDate> {
    let elapsed = u64::from(today.weekday().num_days_from_sunday());
    today.checked_add_days(Days::new(7_u64.saturating_sub(elapsed)))
}

fn month_end(today: NaiveDate) -> Option<NaiveDate> {
    today
        .with_day(1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

impl TryFrom<&str> for DueBucket {
    type Error = ParseCriterionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            WILDCARD => Ok(Self::All),
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "overdue" => Ok(Self::Overdue),
            _ => Err(ParseCriterionError::new("due-date bucket", value)),
        }
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Keep input order.
    #[default]
    Unsorted,
    /// Highest priority first.
    Priority,
    /// Earliest due date first; undated tasks last.
    DueDate,
}

impl TryFrom<&str> for SortKey {
    type Error = ParseCriterionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "" | "none" => Ok(Self::Unsorted),
            "priority" => Ok(Self::Priority),
            "dueDate" | "due_date" => Ok(Self::DueDate),
            _ => Err(ParseCriterionError::new("sort key", value)),
        }
    }
}
