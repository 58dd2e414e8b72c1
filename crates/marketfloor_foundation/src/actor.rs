//! The acting user, as handed in by the surrounding session.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Role of the acting user for the whole session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Role {
    /// Market staff: arranges the layout and runs the status board.
    Admin,
    /// A visitor: may only reserve available tables.
    Customer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => f.write_str("admin"),
            Self::Customer => f.write_str("customer"),
        }
    }
}

/// Stable identity of a user, recorded on audit events.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UserId(String);

impl UserId {
    /// Creates a user id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The user driving the session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Actor {
    /// Identity captured on audit events.
    pub user: UserId,
    /// Display name for notifications.
    pub name: String,
    /// Fixed role for the session.
    pub role: Role,
}

impl Actor {
    /// Creates an actor.
    #[must_use]
    pub fn new(user: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            user: UserId::new(user),
            name: name.into(),
            role,
        }
    }

    /// Creates an admin actor.
    #[must_use]
    pub fn admin(user: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(user, name, Role::Admin)
    }

    /// Creates a customer actor.
    #[must_use]
    pub fn customer(user: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(user, name, Role::Customer)
    }

    /// Returns true for admins.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.user, self.role)
    }
}
