//! Item rendering hints and hit-testing.
//!
//! [`affordance`] is a pure function of `(item, mode, role)`: the same inputs
//! always give the same appearance and the same enabled interactions.
//!
//! | Mode        | Role     | Click on table                    | Click on stall    | Drag       |
//! |-------------|----------|-----------------------------------|-------------------|------------|
//! | Navigate    | Admin    | open status editor                | jump to its POS   | no         |
//! | Navigate    | Customer | open reservation if available     | nothing           | no         |
//! | Edit(Move)  | Admin    | nothing                           | nothing           | reposition |
//! | Edit(Erase) | Admin    | remove                            | remove            | no         |

use marketfloor_foundation::{ItemType, Role, StallId, TableStatus};
use marketfloor_layout::LayoutItem;

use crate::mode::{EditTool, Mode};

// =============================================================================
// Appearance
// =============================================================================

/// Drawn shape of an item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Rectangular vendor booth.
    Booth,
    /// Round table with seats.
    RoundTable,
    /// Raised platform.
    Platform,
    /// Gate marker.
    Gateway,
    /// Small facility icon.
    Facility,
    /// Tree canopy.
    Canopy,
    /// Strip sized by the item's footprint.
    Strip,
    /// Building block.
    Building,
    /// Thin post.
    Post,
    /// Generic marker.
    Marker,
}

/// Colour role of an item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Default colouring.
    Neutral,
    /// Table status colouring.
    Status(TableStatus),
    /// Highlighted for removal.
    EraseTarget,
    /// Shown but not interactive for this user.
    Muted,
}

/// Pointer cursor to show over an item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// Plain arrow.
    Default,
    /// Clickable.
    Pointer,
    /// Draggable.
    Grab,
    /// Removes on click.
    Erase,
    /// Visible but unavailable.
    NotAllowed,
}

/// How an item should be drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Appearance {
    /// Shape for the item type.
    pub shape: Shape,
    /// Colour role.
    pub tone: Tone,
    /// Cursor hint.
    pub cursor: Cursor,
}

// =============================================================================
// Interactions
// =============================================================================

/// What a click on an item does.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClickAction {
    /// Open the admin status editor for this table.
    OpenStatusEditor,
    /// Open the customer reservation dialog for this table.
    OpenReservation,
    /// Switch to the point-of-sale view of the linked stall.
    SwitchToPointOfSale(StallId),
    /// Remove the item.
    Erase,
}

/// Appearance plus enabled interactions for one item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Affordance {
    /// How to draw the item.
    pub appearance: Appearance,
    /// What a click does, if anything.
    pub click: Option<ClickAction>,
    /// Whether pointer-down starts a drag.
    pub draggable: bool,
}

/// Returns the shape for an item type.
#[must_use]
pub fn shape_for(item_type: ItemType) -> Shape {
    match item_type {
        ItemType::Stall => Shape::Booth,
        ItemType::Table => Shape::RoundTable,
        ItemType::Stage => Shape::Platform,
        ItemType::Entrance => Shape::Gateway,
        ItemType::Toilet => Shape::Facility,
        ItemType::Tree => Shape::Canopy,
        ItemType::Street => Shape::Strip,
        ItemType::House | ItemType::Office => Shape::Building,
        ItemType::Pole => Shape::Post,
        ItemType::Other => Shape::Marker,
    }
}

/// Returns what a click on `item` does in `mode` for `role`.
#[must_use]
pub fn click_action(item: &LayoutItem, mode: Mode, role: Role) -> Option<ClickAction> {
    match (mode, role) {
        (Mode::Navigate, Role::Admin) => match item.item_type() {
            ItemType::Table => Some(ClickAction::OpenStatusEditor),
            ItemType::Stall => item.linked_stall().map(ClickAction::SwitchToPointOfSale),
            _ => None,
        },
        (Mode::Navigate, Role::Customer) => match item.status() {
            Some(status) if status.is_reservable() => Some(ClickAction::OpenReservation),
            _ => None,
        },
        (Mode::Edit(EditTool::Erase), Role::Admin) => Some(ClickAction::Erase),
        // Clicks are suppressed while moving; customers never edit.
        (Mode::Edit(EditTool::Move), _) | (Mode::Edit(_), Role::Customer) => None,
    }
}

/// Returns whether pointer-down on an item starts a drag.
#[must_use]
pub fn is_draggable(mode: Mode, role: Role) -> bool {
    mode.allows_drag() && role == Role::Admin
}

/// Computes the full affordance of `item` in `mode` for `role`.
#[must_use]
pub fn affordance(item: &LayoutItem, mode: Mode, role: Role) -> Affordance {
    let click = click_action(item, mode, role);
    let draggable = is_draggable(mode, role);

    let tone = if click == Some(ClickAction::Erase) {
        Tone::EraseTarget
    } else if let Some(status) = item.status() {
        if role == Role::Customer && click.is_none() {
            Tone::Muted
        } else {
            Tone::Status(status)
        }
    } else {
        Tone::Neutral
    };

    let cursor = match click {
        Some(ClickAction::Erase) => Cursor::Erase,
        Some(_) => Cursor::Pointer,
        None if draggable => Cursor::Grab,
        None if role == Role::Customer && item.status().is_some() => Cursor::NotAllowed,
        None => Cursor::Default,
    };

    Affordance {
        appearance: Appearance {
            shape: shape_for(item.item_type()),
            tone,
            cursor,
        },
        click,
        draggable,
    }
}
