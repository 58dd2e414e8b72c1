//! Table status workflow.
//!
//! Admins run a manual status board: any status may follow any other, and
//! nothing changes on its own. Customers get exactly one transition,
//! `Available -> Occupied`, as a reservation.

use std::num::NonZeroU32;

use marketfloor_foundation::{Actor, Error, ItemId, Result, Role, TableStatus, UserId};
use marketfloor_layout::LayoutStore;

use crate::access::{AccessPolicy, Capability};

/// A status change applied to a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusChange {
    /// The table.
    pub table: ItemId,
    /// Status before the change.
    pub from: TableStatus,
    /// Status after the change.
    pub to: TableStatus,
}

impl StatusChange {
    /// Returns true if the status actually changed.
    #[must_use]
    pub fn is_effective(&self) -> bool {
        self.from != self.to
    }
}

/// A confirmed customer reservation.
///
/// The reserving user is recorded here, for the audit trail, and not on the
/// table itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reservation {
    /// The reserved table.
    pub table: ItemId,
    /// The table's label at reservation time.
    pub label: String,
    /// Seats at the table.
    pub capacity: NonZeroU32,
    /// Who reserved it.
    pub reserved_by: UserId,
}

/// Returns whether `role` may move a table from `from` to `to`.
#[must_use]
pub fn can_transition(role: Role, from: TableStatus, to: TableStatus) -> bool {
    match role {
        Role::Admin => true,
        Role::Customer => from == TableStatus::Available && to == TableStatus::Occupied,
    }
}

/// Sets a table's status from the admin status editor.
///
/// # Errors
///
/// Returns `PermissionDenied` if the policy refuses `EditTableStatus`, and
/// `ItemNotFound` or `NotATable` from the store.
pub fn set_status(
    store: &mut LayoutStore,
    actor: &Actor,
    policy: &dyn AccessPolicy,
    table: ItemId,
    to: TableStatus,
) -> Result<StatusChange> {
    policy.require(actor, Capability::EditTableStatus)?;
    let from = store.set_table_status(table, to)?;
    Ok(StatusChange { table, from, to })
}

/// Checks that `table` can be reserved right now, without changing it.
///
/// Used when opening the reservation dialog; [`reserve`] checks again on
/// confirmation.
///
/// # Errors
///
/// Returns `PermissionDenied`, `ItemNotFound`, `NotATable` or
/// `TableUnavailable`.
pub fn check_reservable(
    store: &LayoutStore,
    actor: &Actor,
    policy: &dyn AccessPolicy,
    table: ItemId,
) -> Result<()> {
    policy.require(actor, Capability::ReserveTable)?;
    let item = store.get(table).ok_or_else(|| Error::item_not_found(table))?;
    let status = item
        .status()
        .ok_or_else(|| Error::not_a_table(table, item.item_type()))?;
    // Reservations follow the customer rule whoever books.
    if !can_transition(Role::Customer, status, TableStatus::Occupied) {
        return Err(Error::table_unavailable(table, status));
    }
    Ok(())
}

/// Reserves an available table for the acting user.
///
/// # Errors
///
/// Returns `TableUnavailable` if the table is not available (so a second
/// reservation of the same table fails), plus the errors of
/// [`check_reservable`]. The store is unchanged on error.
pub fn reserve(
    store: &mut LayoutStore,
    actor: &Actor,
    policy: &dyn AccessPolicy,
    table: ItemId,
) -> Result<Reservation> {
    check_reservable(store, actor, policy, table)?;
    store.set_table_status(table, TableStatus::Occupied)?;

    let item = store.get(table).ok_or_else(|| Error::item_not_found(table))?;
    let capacity = item
        .capacity()
        .ok_or_else(|| Error::not_a_table(table, item.item_type()))?;
    Ok(Reservation {
        table,
        label: item.label().to_string(),
        capacity,
        reserved_by: actor.user.clone(),
    })
}
