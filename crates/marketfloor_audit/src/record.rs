//! Audit event and record types.
//!
//! This module defines the events recorded when the floor plan changes or
//! an action is refused.

use std::num::NonZeroU32;

use marketfloor_foundation::{ItemId, ItemType, Position, StallId, TableStatus, UserId};
use marketfloor_interaction::Mode;

// =============================================================================
// Audit Event
// =============================================================================

/// Events recorded by the auditor.
#[derive(Clone, Debug, PartialEq)]
pub enum AuditEvent {
    /// The interaction mode changed.
    ModeChanged {
        /// Mode before.
        from: Mode,
        /// Mode after.
        to: Mode,
    },

    /// An item was placed.
    ItemAdded {
        /// The new item.
        item: ItemId,
        /// Its type.
        item_type: ItemType,
    },

    /// An item was erased.
    ItemRemoved {
        /// The erased item.
        item: ItemId,
        /// Its type.
        item_type: ItemType,
        /// Its label at removal time.
        label: String,
    },

    /// A drag finished and left the item at a new position.
    ItemMoved {
        /// The moved item.
        item: ItemId,
        /// Final stored position.
        position: Position,
    },

    /// An admin changed a table's status.
    StatusChanged {
        /// The table.
        table: ItemId,
        /// Status before.
        from: TableStatus,
        /// Status after.
        to: TableStatus,
    },

    /// A customer reservation was confirmed.
    ReservationConfirmed {
        /// The reserved table.
        table: ItemId,
        /// Table label.
        label: String,
        /// Seats at the table.
        capacity: NonZeroU32,
    },

    /// The host was asked to open a stall's point-of-sale view.
    PointOfSaleOpened {
        /// The linked stall record.
        stall: StallId,
    },

    /// An action was refused.
    ActionRejected {
        /// Name of the refused action.
        action: &'static str,
        /// Why it was refused.
        reason: String,
    },
}

impl AuditEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ModeChanged { .. } => "mode-changed",
            Self::ItemAdded { .. } => "item-added",
            Self::ItemRemoved { .. } => "item-removed",
            Self::ItemMoved { .. } => "item-moved",
            Self::StatusChanged { .. } => "status-changed",
            Self::ReservationConfirmed { .. } => "reservation-confirmed",
            Self::PointOfSaleOpened { .. } => "point-of-sale-opened",
            Self::ActionRejected { .. } => "action-rejected",
        }
    }

    /// Returns true if this event changed the layout.
    #[must_use]
    pub fn is_layout_change(&self) -> bool {
        matches!(
            self,
            Self::ItemAdded { .. }
                | Self::ItemRemoved { .. }
                | Self::ItemMoved { .. }
                | Self::StatusChanged { .. }
                | Self::ReservationConfirmed { .. }
        )
    }

    /// Returns the item this event concerns, if any.
    #[must_use]
    pub fn item(&self) -> Option<ItemId> {
        match self {
            Self::ItemAdded { item, .. }
            | Self::ItemRemoved { item, .. }
            | Self::ItemMoved { item, .. } => Some(*item),
            Self::StatusChanged { table, .. } | Self::ReservationConfirmed { table, .. } => {
                Some(*table)
            }
            Self::ModeChanged { .. }
            | Self::PointOfSaleOpened { .. }
            | Self::ActionRejected { .. } => None,
        }
    }
}

// =============================================================================
// Audit Record
// =============================================================================

/// A recorded audit event with its metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct AuditRecord {
    /// Unique record ID within the session.
    pub id: u64,
    /// Number of the host interaction that produced the event.
    pub interaction: u64,
    /// Timestamp in nanoseconds since the auditor started.
    pub timestamp_ns: u64,
    /// The acting user.
    pub actor: UserId,
    /// The event.
    pub event: AuditEvent,
}

impl AuditRecord {
    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

// =============================================================================
// Tests
// =============================================================================
