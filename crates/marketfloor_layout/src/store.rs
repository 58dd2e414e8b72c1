//! The layout store: the ordered collection of placed items.
//!
//! Items are keyed by [`ItemId`] in a persistent ordered map. Ids are
//! allocated from a monotonic counter, so key order is insertion order and
//! a snapshot for rendering is an O(1) clone sharing structure with the
//! live store.

use std::num::NonZeroU32;

use im::OrdMap;
use marketfloor_foundation::{Error, ItemId, ItemType, Position, Result, StallId, TableStatus};

use crate::config::LayoutConfig;
use crate::item::{ItemKind, LayoutItem};
use crate::seed::SeedItem;

/// Owns every placed item and exposes the mutations the editor needs.
///
/// Lookups by an unknown id never panic. Removal and moves treat a missing
/// id as a no-op; table and stall edits report it as
/// [`ErrorKind::ItemNotFound`](marketfloor_foundation::ErrorKind::ItemNotFound)
/// without touching the collection.
#[derive(Clone, Debug)]
pub struct LayoutStore {
    /// Items in insertion order.
    items: OrdMap<ItemId, LayoutItem>,
    /// Next id to hand out. Never decreases.
    next_id: ItemId,
    /// Creation defaults.
    config: LayoutConfig,
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutStore {
    /// Creates an empty store with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    /// Creates an empty store with the given configuration.
    #[must_use]
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            items: OrdMap::new(),
            next_id: ItemId::new(1),
            config,
        }
    }

    /// Creates a store pre-populated from a seed plan.
    #[must_use]
    pub fn from_seed(config: LayoutConfig, seed: &[SeedItem]) -> Self {
        let mut store = Self::with_config(config);
        for entry in seed {
            store.insert_seed(entry);
        }
        store
    }

    /// Returns the creation defaults.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    fn insert_seed(&mut self, entry: &SeedItem) -> ItemId {
        let id = self.add_item_at(entry.item_type, entry.position.x(), entry.position.y());
        if let Some(label) = &entry.label {
            self.set_label(id, label.clone());
        }
        if let Some(item) = self.items.get_mut(&id) {
            if let ItemKind::Stall { linked_stall } = item.kind_mut() {
                *linked_stall = entry.linked_stall;
            }
        }
        id
    }

    // -------------------------------------------------------------------------
    // Creation and removal
    // -------------------------------------------------------------------------

    /// Adds a new item of `item_type` at the configured spawn position.
    ///
    /// Always succeeds. The label defaults to the type's name; tables start
    /// available with the default capacity; streets get the default size.
    pub fn add_item(&mut self, item_type: ItemType) -> ItemId {
        let position = self.config.spawn_position;
        self.add_item_at(item_type, position.x(), position.y())
    }

    /// Adds a new item of `item_type` at `(x, y)`, clamped into bounds.
    pub fn add_item_at(&mut self, item_type: ItemType, x: f64, y: f64) -> ItemId {
        let id = self.allocate_id();
        let item = LayoutItem::new(
            id,
            ItemKind::for_type(item_type, self.config.table_capacity),
            item_type.name().to_string(),
            Position::new(x, y),
            self.config.size_for(item_type),
        );
        self.items.insert(id, item);
        id
    }

    /// Removes an item, returning it.
    ///
    /// Returns `None` (and changes nothing) if the id is absent, so removing
    /// twice is harmless.
    pub fn remove_item(&mut self, id: ItemId) -> Option<LayoutItem> {
        self.items.remove(&id)
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Moves an item to `(x, y)`, clamping both coordinates into `[0, 100]`.
    ///
    /// Returns the stored position, or `None` if the id is absent.
    pub fn move_item(&mut self, id: ItemId, x: f64, y: f64) -> Option<Position> {
        let item = self.items.get_mut(&id)?;
        let position = Position::new(x, y);
        item.set_position(position);
        Some(position)
    }

    /// Sets the status of a table, returning its previous status.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if the id is absent and `NotATable` if the item
    /// is not a table. The collection is unchanged in both cases.
    pub fn set_table_status(&mut self, id: ItemId, status: TableStatus) -> Result<TableStatus> {
        let item = self
            .items
            .get_mut(&id)
            .ok_or_else(|| Error::item_not_found(id))?;
        let actual = item.item_type();
        let table = item
            .table_mut()
            .ok_or_else(|| Error::not_a_table(id, actual))?;
        Ok(std::mem::replace(&mut table.status, status))
    }

    /// Sets the seat count of a table, returning the previous count.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCapacity` for zero, `ItemNotFound` if the id is absent
    /// and `NotATable` if the item is not a table.
    pub fn set_table_capacity(&mut self, id: ItemId, capacity: u32) -> Result<NonZeroU32> {
        let capacity = NonZeroU32::new(capacity).ok_or_else(|| Error::invalid_capacity(capacity))?;
        let item = self
            .items
            .get_mut(&id)
            .ok_or_else(|| Error::item_not_found(id))?;
        let actual = item.item_type();
        let table = item
            .table_mut()
            .ok_or_else(|| Error::not_a_table(id, actual))?;
        Ok(std::mem::replace(&mut table.capacity, capacity))
    }

    /// Links a stall to a point-of-sale stall record (or unlinks it with
    /// `None`), returning the previous link.
    ///
    /// # Errors
    ///
    /// Returns `ItemNotFound` if the id is absent and `NotAStall` if the item
    /// is not a stall.
    pub fn link_stall(&mut self, id: ItemId, stall: Option<StallId>) -> Result<Option<StallId>> {
        let item = self
            .items
            .get_mut(&id)
            .ok_or_else(|| Error::item_not_found(id))?;
        let actual = item.item_type();
        match item.kind_mut() {
            ItemKind::Stall { linked_stall } => Ok(std::mem::replace(linked_stall, stall)),
            _ => Err(Error::not_a_stall(id, actual)),
        }
    }

    /// Renames an item, returning the previous label, or `None` if absent.
    pub fn set_label(&mut self, id: ItemId, label: impl Into<String>) -> Option<String> {
        let item = self.items.get_mut(&id)?;
        Some(item.set_label(label.into()))
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Looks up an item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&LayoutItem> {
        self.items.get(&id)
    }

    /// Returns true if an item with this id is placed.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Number of placed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LayoutItem> {
        self.items.values()
    }

    /// Iterates over item ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.keys().copied()
    }

    /// Iterates over table items.
    pub fn tables(&self) -> impl Iterator<Item = &LayoutItem> {
        self.items.values().filter(|item| item.table().is_some())
    }

    /// Returns a read-only copy of the collection for rendering.
    ///
    /// O(1): the snapshot shares structure with the store and is unaffected
    /// by later mutations.
    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            items: self.items.clone(),
        }
    }
}

/// Read-only copy of the layout at one point in time.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutSnapshot {
    items: OrdMap<ItemId, LayoutItem>,
}

impl LayoutSnapshot {
    /// Looks up an item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&LayoutItem> {
        self.items.get(&id)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the snapshot holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LayoutItem> {
        self.items.values()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LayoutSnapshot {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Rendered as a plain list in draw order.
        serializer.collect_seq(self.items.values())
    }
}
