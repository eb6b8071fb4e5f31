//! Sample data written into a fresh store.

use chrono::NaiveDate;
use mockable::Clock;

use crate::identity::{
    domain::{EmailAddress, User, UserId},
    ports::CredentialHasher,
    services::IdentityResult,
};
use crate::task::domain::{
    Priority, Task, TaskContent, TaskDomainError, TaskId, TaskLedger, TaskStatus,
};

/// Password shared by every sample account.
pub const SAMPLE_PASSWORD: &str = "password123";

const SAMPLE_USERS: [(&str, &str); 4] = [
    ("John Doe", "john@example.com"),
    ("Jane Smith", "jane@example.com"),
    ("Mike Johnson", "mike@example.com"),
    ("Sarah Williams", "sarah@example.com"),
];

struct SampleTask {
    title: &'static str,
    description: &'static str,
    priority: Priority,
    assignee: u64,
    due: (i32, u32, u32),
    status: TaskStatus,
}

const SAMPLE_TASKS: [SampleTask; 3] = [
    SampleTask {
        title: "Design Homepage",
        description: "Create wireframes and mockups for the new homepage design",
        priority: Priority::High,
        assignee: 1,
        due: (2025, 10, 10),
        status: TaskStatus::Todo,
    },
    SampleTask {
        title: "Write Project Proposal",
        description: "Draft the initial proposal for the Q3 marketing campaign",
        priority: Priority::Medium,
        assignee: 2,
        due: (2025, 10, 20),
        status: TaskStatus::InProgress,
    },
    SampleTask {
        title: "Review Codebase",
        description: "Perform a code review for the new feature implementation",
        priority: Priority::Low,
        assignee: 3,
        due: (2025, 10, 15),
        status: TaskStatus::Done,
    },
];

const SAMPLE_COMMENT: &str = "Looking forward to seeing the designs!";

/// Builds the four sample accounts, numbered from 1.
pub(super) fn sample_users(hasher: &dyn CredentialHasher) -> IdentityResult<Vec<User>> {
    let mut users = Vec::with_capacity(SAMPLE_USERS.len());
    let mut id = UserId::new(1);
    for (name, email) in SAMPLE_USERS {
        let hash = hasher.hash(SAMPLE_PASSWORD)?;
        users.push(User::new(id, name, EmailAddress::new(email)?, hash)?);
        id = id.next();
    }
    Ok(users)
}

/// Builds the three sample tasks, all created by user 1.
///
/// The first task carries one comment by user 2. Configured length limits
/// govern user input only, so the fixed samples are built without them.
pub(super) fn sample_ledger(clock: &impl Clock) -> Result<TaskLedger, TaskDomainError> {
    let creator = UserId::new(1);
    let mut ledger = TaskLedger::new();
    for sample in SAMPLE_TASKS {
        let (year, month, day) = sample.due;
        let content = TaskContent {
            title: sample.title.to_owned(),
            description: sample.description.to_owned(),
            category: "work".to_owned(),
            priority: sample.priority,
            assignee: Some(UserId::new(sample.assignee)),
            due_date: NaiveDate::from_ymd_opt(year, month, day),
            status: sample.status,
        };
        let mut task = Task::new(
            ledger.next_task_id(),
            content,
            usize::MAX,
            creator,
            clock,
        )?;
        if task.id() == TaskId::FIRST {
            task.add_comment(UserId::new(2), SAMPLE_COMMENT, usize::MAX, clock)?;
        }
        ledger.push(task);
    }
    Ok(ledger)
}
