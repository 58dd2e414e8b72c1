//! The interaction mode state machine.
//!
//! ```text
//!             toggle_arrange (admin)
//!   Navigate ───────────────────────▶ Edit(Move) ◀──┐
//!      ▲                                  │         │ toggle_eraser
//!      │ done_editing / toggle_arrange    ▼         │
//!      └───────────────────────────── Edit(Erase) ──┘
//! ```
//!
//! The role is not part of the state. It is passed to every transition and
//! checked through the access policy, so a customer can never reach Edit.

use std::fmt;

use marketfloor_foundation::{Actor, Error, Result};

use crate::access::{AccessPolicy, Capability};

/// Active tool while editing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EditTool {
    /// Drag items to reposition them.
    #[default]
    Move,
    /// Click items to remove them.
    Erase,
}

/// Interaction mode of the floor plan.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Browsing: clicks open dialogs or jump to stalls.
    #[default]
    Navigate,
    /// Arranging the layout with the given tool.
    Edit(EditTool),
}

impl Mode {
    /// Returns true while arranging the layout.
    #[must_use]
    pub fn is_editing(self) -> bool {
        matches!(self, Self::Edit(_))
    }

    /// Returns true while the eraser is active.
    #[must_use]
    pub fn is_erasing(self) -> bool {
        self == Self::Edit(EditTool::Erase)
    }

    /// Returns true if items may be dragged in this mode.
    #[must_use]
    pub fn allows_drag(self) -> bool {
        self == Self::Edit(EditTool::Move)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Navigate => f.write_str("navigate"),
            Self::Edit(EditTool::Move) => f.write_str("edit/move"),
            Self::Edit(EditTool::Erase) => f.write_str("edit/erase"),
        }
    }
}

/// Owns the current mode and applies role-gated transitions.
#[derive(Clone, Debug, Default)]
pub struct ModeController {
    mode: Mode,
}

impl ModeController {
    /// Creates a controller in [`Mode::Navigate`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Toggles "arrange layout": Navigate enters Edit(Move), any Edit mode
    /// returns to Navigate.
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` if the actor may not arrange the layout.
    pub fn toggle_arrange(&mut self, actor: &Actor, policy: &dyn AccessPolicy) -> Result<Mode> {
        policy.require(actor, Capability::ArrangeLayout)?;
        self.mode = match self.mode {
            Mode::Navigate => Mode::Edit(EditTool::Move),
            Mode::Edit(_) => Mode::Navigate,
        };
        Ok(self.mode)
    }

    /// Switches between the move and erase tools.
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` if the actor may not arrange the layout and
    /// `InvalidMode` outside edit mode.
    pub fn toggle_eraser(&mut self, actor: &Actor, policy: &dyn AccessPolicy) -> Result<Mode> {
        policy.require(actor, Capability::ArrangeLayout)?;
        self.mode = match self.mode {
            Mode::Navigate => {
                return Err(Error::invalid_mode("the eraser is only available while editing"));
            }
            Mode::Edit(EditTool::Move) => Mode::Edit(EditTool::Erase),
            Mode::Edit(EditTool::Erase) => Mode::Edit(EditTool::Move),
        };
        Ok(self.mode)
    }

    /// Leaves edit mode. Already navigating is a no-op.
    pub fn done_editing(&mut self) -> Mode {
        self.mode = Mode::Navigate;
        self.mode
    }
}
