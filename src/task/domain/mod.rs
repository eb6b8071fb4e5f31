//! Domain model for the task collection.
//!
//! Tasks, their comments, and the team roster they are assigned from. All
//! types here are plain data with validation; nothing touches storage.

mod comment;
mod error;
mod ids;
mod ledger;
mod member;
mod priority;
mod status;
mod task;

pub use comment::Comment;
pub use error::{ParsePriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::{CommentId, TaskId};
pub use ledger::TaskLedger;
pub use member::{TeamMember, TeamRoster, avatar_initials};
pub use priority::Priority;
pub use status::TaskStatus;
pub use task::{Task, TaskContent};
