//! Table status board states.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Status of a table item.
///
/// The board is manually driven: an admin may move a table between any two
/// states, and there is no terminal state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TableStatus {
    /// Free to be seated or reserved.
    #[default]
    Available,
    /// Seated or booked.
    Occupied,
    /// Guests are ordering.
    Ordering,
    /// Needs clearing before reuse.
    Dirty,
}

impl TableStatus {
    /// All statuses, in the order the status editor lists them.
    pub const ALL: [TableStatus; 4] = [
        Self::Available,
        Self::Occupied,
        Self::Ordering,
        Self::Dirty,
    ];

    /// Returns true if a customer may reserve a table in this status.
    #[must_use]
    pub const fn is_reservable(self) -> bool {
        matches!(self, Self::Available)
    }

    /// Returns a short lowercase tag for event names and formatting.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Ordering => "ordering",
            Self::Dirty => "dirty",
        }
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Ordering => "Ordering",
            Self::Dirty => "Dirty",
        };
        f.write_str(name)
    }
}
