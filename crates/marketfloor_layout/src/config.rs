//! Creation defaults for new layout items.

use std::num::NonZeroU32;

use marketfloor_foundation::{ItemType, Position, Size};

/// Seat count given to new tables.
pub const DEFAULT_TABLE_CAPACITY: NonZeroU32 = match NonZeroU32::new(4) {
    Some(n) => n,
    None => NonZeroU32::MIN,
};

/// Defaults applied when an item is added.
///
/// The default configuration places new items at the centre, gives tables
/// four seats and streets a 20 x 5 footprint.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Where new items appear.
    pub spawn_position: Position,
    /// Seat count of new tables.
    pub table_capacity: NonZeroU32,
    /// Footprint of new streets.
    pub street_size: Size,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spawn_position: Position::center(),
            table_capacity: DEFAULT_TABLE_CAPACITY,
            street_size: Size::new(20.0, 5.0),
        }
    }
}

impl LayoutConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the spawn position.
    #[must_use]
    pub fn with_spawn_position(mut self, position: Position) -> Self {
        self.spawn_position = position;
        self
    }

    /// Builder method to set the default table capacity.
    #[must_use]
    pub fn with_table_capacity(mut self, capacity: NonZeroU32) -> Self {
        self.table_capacity = capacity;
        self
    }

    /// Builder method to set the default street footprint.
    #[must_use]
    pub fn with_street_size(mut self, size: Size) -> Self {
        self.street_size = size;
        self
    }

    /// Returns the creation-time footprint for `item_type`.
    #[must_use]
    pub fn size_for(&self, item_type: ItemType) -> Option<Size> {
        match item_type {
            ItemType::Street => Some(self.street_size),
            _ => None,
        }
    }
}
