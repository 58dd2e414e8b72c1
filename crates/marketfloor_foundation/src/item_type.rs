//! The closed set of item types that can be placed on the floor plan.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type of a placed layout item.
///
/// Every per-type mapping (labels, defaults, shapes) is an exhaustive match
/// on this enum, so a new type is a single compile-checked addition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ItemType {
    /// A vendor stall, optionally linked to a point-of-sale stall record.
    Stall,
    /// A dining table with a status and seating capacity.
    Table,
    /// A performance stage.
    Stage,
    /// A market entrance.
    Entrance,
    /// Public toilets.
    Toilet,
    /// A tree.
    Tree,
    /// A street or walkway strip.
    Street,
    /// A house.
    House,
    /// A lamp or utility pole.
    Pole,
    /// The market office.
    Office,
    /// Anything else.
    Other,
}

impl ItemType {
    /// All item types, in palette order.
    pub const ALL: [ItemType; 11] = [
        Self::Stall,
        Self::Table,
        Self::Stage,
        Self::Entrance,
        Self::Toilet,
        Self::Tree,
        Self::Street,
        Self::House,
        Self::Pole,
        Self::Office,
        Self::Other,
    ];

    /// Returns the display name, also used as the default label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stall => "Stall",
            Self::Table => "Table",
            Self::Stage => "Stage",
            Self::Entrance => "Entrance",
            Self::Toilet => "Toilet",
            Self::Tree => "Tree",
            Self::Street => "Street",
            Self::House => "House",
            Self::Pole => "Pole",
            Self::Office => "Office",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
