//! Month view arithmetic.

use chrono::{Datelike, Months, NaiveDate};
use std::collections::BTreeMap;

use crate::task::domain::Task;

/// A calendar month, weeks starting on Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    /// Creates the month `month` (1-12) of `year`.
    ///
    /// Returns `None` for an invalid month or an unrepresentable year.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// Returns the month containing `date`.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        let first = date.with_day(1).unwrap_or(date);
        Self { first }
    }

    /// Returns the year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.first.year()
    }

    /// Returns the month number, 1-12.
    #[must_use]
    pub fn month(self) -> u32 {
        self.first.month()
    }

    /// Returns the following month; stays put at the end of the date range.
    #[must_use]
    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map_or(self, |first| Self { first })
    }

    /// Returns the preceding month; stays put at the start of the date range.
    #[must_use]
    pub fn previous(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map_or(self, |first| Self { first })
    }

    /// Returns the first day of the month.
    #[must_use]
    pub const fn first_day(self) -> NaiveDate {
        self.first
    }

    /// Returns the last day of the month.
    #[must_use]
    pub fn last_day(self) -> NaiveDate {
        self.first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Returns the number of days in the month.
    #[must_use]
    pub fn days(self) -> u32 {
        self.last_day().day()
    }

    /// Returns how many cells precede the first day in a Sunday-started grid.
    #[must_use]
    pub fn leading_blank_days(self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    /// Returns whether `date` falls in the month.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Groups the tasks due this month by due date, each day in input order.
    #[must_use]
    pub fn tasks_by_day(self, tasks: &[Task]) -> BTreeMap<NaiveDate, Vec<Task>> {
        let mut days: BTreeMap<NaiveDate, Vec<Task>> = BTreeMap::new();
        for task in tasks {
            if let Some(due) = task.due_date().filter(|due| self.contains(*due)) {
                days.entry(due).or_default().push(task.clone());
            }
        }
        days
    }
}
