//! Drag repositioning, independent of any UI event system.
//!
//! The machine is `{ dragging: Option<ItemId> }` and changes only through
//! [`DragState::begin_drag`], [`DragState::update_drag`] and
//! [`DragState::end_drag`]. At most one item drags at a time.

use marketfloor_foundation::{Error, ItemId, Position, Result, Role};
use marketfloor_layout::LayoutStore;

use crate::mode::Mode;

/// Pixel dimensions of the floor plan container on screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Container {
    width: f64,
    height: f64,
}

impl Container {
    /// Creates a container. Non-positive or non-finite extents are stored
    /// as zero and map every pointer to the origin.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        let sanitize = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(self) -> f64 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(self) -> f64 {
        self.height
    }

    /// Converts container-relative pixels into unclamped percentages.
    ///
    /// Clamping happens when the store applies the move.
    #[must_use]
    pub fn to_percent(self, px: f64, py: f64) -> (f64, f64) {
        let scale = |p: f64, extent: f64| if extent > 0.0 { p / extent * 100.0 } else { 0.0 };
        (scale(px, self.width), scale(py, self.height))
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}

/// Which item, if any, is being dragged.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DragState {
    dragging: Option<ItemId>,
}

impl DragState {
    /// Creates an idle drag state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The item being dragged.
    #[must_use]
    pub fn dragging(&self) -> Option<ItemId> {
        self.dragging
    }

    /// Returns true while an item is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    /// Starts dragging `id` on pointer-down.
    ///
    /// # Errors
    ///
    /// - `PermissionDenied` for customers
    /// - `InvalidMode` outside Edit(Move), or while another item drags
    /// - `ItemNotFound` if the item is not placed
    pub fn begin_drag(
        &mut self,
        store: &LayoutStore,
        id: ItemId,
        mode: Mode,
        role: Role,
    ) -> Result<()> {
        if role != Role::Admin {
            return Err(Error::permission_denied("only market staff can move items"));
        }
        if !mode.allows_drag() {
            return Err(Error::invalid_mode(format!("cannot drag in {mode} mode")));
        }
        if let Some(current) = self.dragging {
            return Err(Error::invalid_mode(format!("{current} is already being dragged")));
        }
        if !store.contains(id) {
            return Err(Error::item_not_found(id));
        }
        self.dragging = Some(id);
        Ok(())
    }

    /// Moves the dragged item to `(x, y)` percent, clamped by the store.
    ///
    /// Returns the stored position, or `None` when idle. If the dragged item
    /// has disappeared the drag ends.
    pub fn update_drag(&mut self, store: &mut LayoutStore, x: f64, y: f64) -> Option<Position> {
        let id = self.dragging?;
        let moved = store.move_item(id, x, y);
        if moved.is_none() {
            self.dragging = None;
        }
        moved
    }

    /// Ends the drag on pointer-up or pointer-leave, returning the item that
    /// was being dragged.
    pub fn end_drag(&mut self) -> Option<ItemId> {
        self.dragging.take()
    }
}
