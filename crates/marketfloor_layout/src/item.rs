//! Placed layout items.

use std::num::NonZeroU32;

use marketfloor_foundation::{ItemId, ItemType, Position, Size, StallId, TableStatus};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Status and seating of a table item.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TableState {
    /// Current status board state.
    pub status: TableStatus,
    /// Number of seats.
    pub capacity: NonZeroU32,
}

impl TableState {
    /// Creates an available table with the given capacity.
    #[must_use]
    pub fn available(capacity: NonZeroU32) -> Self {
        Self {
            status: TableStatus::Available,
            capacity,
        }
    }
}

/// Type-specific data of a layout item.
///
/// Only tables carry a [`TableState`] and only stalls carry a stall link,
/// so neither can end up on the wrong item type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum ItemKind {
    /// A vendor stall.
    Stall {
        /// Back-reference to the point-of-sale stall record, if linked.
        linked_stall: Option<StallId>,
    },
    /// A table.
    Table(TableState),
    /// A stage.
    Stage,
    /// An entrance.
    Entrance,
    /// Toilets.
    Toilet,
    /// A tree.
    Tree,
    /// A street strip.
    Street,
    /// A house.
    House,
    /// A pole.
    Pole,
    /// The office.
    Office,
    /// Anything else.
    Other,
}

impl ItemKind {
    /// Builds the creation-time kind for `item_type`.
    #[must_use]
    pub fn for_type(item_type: ItemType, table_capacity: NonZeroU32) -> Self {
        match item_type {
            ItemType::Stall => Self::Stall { linked_stall: None },
            ItemType::Table => Self::Table(TableState::available(table_capacity)),
            ItemType::Stage => Self::Stage,
            ItemType::Entrance => Self::Entrance,
            ItemType::Toilet => Self::Toilet,
            ItemType::Tree => Self::Tree,
            ItemType::Street => Self::Street,
            ItemType::House => Self::House,
            ItemType::Pole => Self::Pole,
            ItemType::Office => Self::Office,
            ItemType::Other => Self::Other,
        }
    }

    /// Returns the field-less type tag.
    #[must_use]
    pub fn item_type(&self) -> ItemType {
        match self {
            Self::Stall { .. } => ItemType::Stall,
            Self::Table(_) => ItemType::Table,
            Self::Stage => ItemType::Stage,
            Self::Entrance => ItemType::Entrance,
            Self::Toilet => ItemType::Toilet,
            Self::Tree => ItemType::Tree,
            Self::Street => ItemType::Street,
            Self::House => ItemType::House,
            Self::Pole => ItemType::Pole,
            Self::Office => ItemType::Office,
            Self::Other => ItemType::Other,
        }
    }
}

/// A placed object on the market floor plan.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutItem {
    id: ItemId,
    kind: ItemKind,
    label: String,
    position: Position,
    size: Option<Size>,
}

impl LayoutItem {
    pub(crate) fn new(
        id: ItemId,
        kind: ItemKind,
        label: String,
        position: Position,
        size: Option<Size>,
    ) -> Self {
        Self {
            id,
            kind,
            label,
            position,
            size,
        }
    }

    /// Stable id assigned at creation.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// The item's type.
    #[must_use]
    pub fn item_type(&self) -> ItemType {
        self.kind.item_type()
    }

    /// Type-specific data.
    #[must_use]
    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Anchor position, always within bounds.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Footprint, for the types that use one.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Table state, for tables only.
    #[must_use]
    pub fn table(&self) -> Option<&TableState> {
        match &self.kind {
            ItemKind::Table(state) => Some(state),
            _ => None,
        }
    }

    /// Table status, for tables only.
    #[must_use]
    pub fn status(&self) -> Option<TableStatus> {
        self.table().map(|t| t.status)
    }

    /// Seat count, for tables only.
    #[must_use]
    pub fn capacity(&self) -> Option<NonZeroU32> {
        self.table().map(|t| t.capacity)
    }

    /// Linked point-of-sale stall, for linked stalls only.
    #[must_use]
    pub fn linked_stall(&self) -> Option<StallId> {
        match self.kind {
            ItemKind::Stall { linked_stall } => linked_stall,
            _ => None,
        }
    }

    pub(crate) fn table_mut(&mut self) -> Option<&mut TableState> {
        match &mut self.kind {
            ItemKind::Table(state) => Some(state),
            _ => None,
        }
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) fn set_label(&mut self, label: String) -> String {
        std::mem::replace(&mut self.label, label)
    }

    pub(crate) fn kind_mut(&mut self) -> &mut ItemKind {
        &mut self.kind
    }
}
