//! Team members and the roster they are assigned from.

use crate::identity::domain::{User, UserId};
use serde::{Deserialize, Serialize};

/// Returns the initials of `name`: the first character of each
/// whitespace-separated word.
///
/// # Examples
///
/// ```
/// use taskdeck::task::domain::avatar_initials;
///
/// assert_eq!(avatar_initials("Sarah Williams"), "SW");
/// assert_eq!(avatar_initials("  mary  ann lee "), "mal");
/// ```
#[must_use]
pub fn avatar_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// A user as seen when assigning tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    id: UserId,
    name: String,
    email: String,
    avatar: String,
}

impl TeamMember {
    /// Projects a user into a team member.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id(),
            name: user.name().to_owned(),
            email: user.email().as_str().to_owned(),
            avatar: avatar_initials(user.name()),
        }
    }

    /// Returns the member's user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the avatar initials.
    #[must_use]
    pub fn avatar(&self) -> &str {
        &self.avatar
    }
}

/// Ordered set of team members, unique by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamRoster(Vec<TeamMember>);

impl TeamRoster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds a roster mirroring `users` in order.
    #[must_use]
    pub fn from_users(users: &[User]) -> Self {
        let mut roster = Self::new();
        for user in users {
            roster.upsert(TeamMember::from_user(user));
        }
        roster
    }

    /// Adds `member`, replacing any member with the same identifier.
    pub fn upsert(&mut self, member: TeamMember) {
        match self.0.iter_mut().find(|existing| existing.id == member.id) {
            Some(existing) => *existing = member,
            None => self.0.push(member),
        }
    }

    /// Finds a member by identifier.
    #[must_use]
    pub fn find(&self, id: UserId) -> Option<&TeamMember> {
        self.0.iter().find(|member| member.id == id)
    }

    /// Returns the members in insertion order.
    #[must_use]
    pub fn members(&self) -> &[TeamMember] {
        &self.0
    }

    /// Returns the number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the roster has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
