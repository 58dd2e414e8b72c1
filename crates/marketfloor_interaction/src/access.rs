//! Capability checks.
//!
//! Role evaluation belongs to the host; this module only defines the
//! question asked of it and a role-based default answer.

use std::fmt;

use marketfloor_foundation::{Actor, Error, Result, Role};

/// Actions gated by the access policy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Enter edit mode and add, move or erase items.
    ArrangeLayout,
    /// Set a table's status from the status editor.
    EditTableStatus,
    /// Jump from a stall to its point-of-sale view.
    OpenPointOfSale,
    /// Reserve an available table.
    ReserveTable,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ArrangeLayout => "arrange-layout",
            Self::EditTableStatus => "edit-table-status",
            Self::OpenPointOfSale => "open-point-of-sale",
            Self::ReserveTable => "reserve-table",
        };
        f.write_str(name)
    }
}

/// Answer from an access policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    /// The action may proceed.
    Allow,
    /// The action is refused, with a reason for the user.
    Deny {
        /// Human-readable reason.
        reason: String,
    },
}

impl AccessDecision {
    /// Creates a denial.
    #[must_use]
    pub fn deny(reason: impl Into<String>) -> Self {
        Self::Deny {
            reason: reason.into(),
        }
    }

    /// Returns true for [`AccessDecision::Allow`].
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Converts a denial into a `PermissionDenied` error.
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` carrying the policy's reason.
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny { reason } => Err(Error::permission_denied(reason)),
        }
    }
}

/// Answers "may this actor do this?".
pub trait AccessPolicy {
    /// Checks a capability for an actor.
    fn check(&self, actor: &Actor, capability: Capability) -> AccessDecision;

    /// Checks a capability and turns a denial into an error.
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` if the policy denies the capability.
    fn require(&self, actor: &Actor, capability: Capability) -> Result<()> {
        self.check(actor, capability).into_result()
    }
}

impl<F> AccessPolicy for F
where
    F: Fn(&Actor, Capability) -> AccessDecision,
{
    fn check(&self, actor: &Actor, capability: Capability) -> AccessDecision {
        self(actor, capability)
    }
}

/// Default policy: admins may do everything, customers may only reserve.
#[derive(Copy, Clone, Debug, Default)]
pub struct RolePolicy;

impl AccessPolicy for RolePolicy {
    fn check(&self, actor: &Actor, capability: Capability) -> AccessDecision {
        match (actor.role, capability) {
            (Role::Admin, _) | (Role::Customer, Capability::ReserveTable) => AccessDecision::Allow,
            (Role::Customer, Capability::ArrangeLayout) => {
                AccessDecision::deny("only market staff can arrange the layout")
            }
            (Role::Customer, Capability::EditTableStatus) => {
                AccessDecision::deny("only market staff can change table status")
            }
            (Role::Customer, Capability::OpenPointOfSale) => {
                AccessDecision::deny("the point of sale is for stall staff only")
            }
        }
    }
}
