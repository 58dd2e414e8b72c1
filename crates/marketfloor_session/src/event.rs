//! Host input events and the signals returned for them.

use marketfloor_foundation::{ItemId, ItemType, Position, StallId, TableStatus, UserId};
use marketfloor_interaction::Mode;

/// Pointer input, in pixels relative to the floor plan container.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// Button pressed, over `target` if it hit an item.
    Down {
        /// The item under the pointer.
        target: Option<ItemId>,
        /// Horizontal pixel offset.
        x: f64,
        /// Vertical pixel offset.
        y: f64,
    },
    /// Pointer moved.
    Move {
        /// Horizontal pixel offset.
        x: f64,
        /// Vertical pixel offset.
        y: f64,
    },
    /// Button released.
    Up,
    /// Pointer left the container.
    Leave,
}

/// Keyboard input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyEvent {
    /// Ends a drag and closes an open dialog.
    Escape,
}

/// What the host should do after an event.
#[derive(Clone, Debug, PartialEq)]
pub enum Signal {
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
    },
    /// An item started dragging.
    DragStarted {
        /// The dragged item.
        item: ItemId,
    },
    /// The dragged item moved.
    ItemMoved {
        /// The dragged item.
        item: ItemId,
        /// Its stored position.
        position: Position,
    },
    /// A drag ended.
    DragEnded {
        /// The item that was dragged.
        item: ItemId,
        /// Where it came to rest, if it still exists.
        position: Option<Position>,
    },
    /// Open the status editor for a table.
    StatusEditorOpened {
        /// The selected table.
        table: ItemId,
    },
    /// Open the reservation dialog for a table.
    ReservationOpened {
        /// The selected table.
        table: ItemId,
    },
    /// The open dialog closed without a change.
    DialogClosed,
    /// A table's status changed from the status editor.
    StatusChanged {
        /// The table.
        table: ItemId,
        /// Status before.
        from: TableStatus,
        /// Status after.
        to: TableStatus,
    },
    /// A reservation was confirmed.
    ReservationConfirmed {
        /// The reserved table.
        table: ItemId,
        /// Who reserved it.
        reserved_by: UserId,
    },
    /// Switch to the point-of-sale view of a stall.
    SwitchToPointOfSale(StallId),
    /// The action was refused.
    Rejected {
        /// The refused action.
        action: &'static str,
        /// Why, for the user.
        reason: String,
    },
}

impl Signal {
    /// Returns true for [`Signal::Rejected`].
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
