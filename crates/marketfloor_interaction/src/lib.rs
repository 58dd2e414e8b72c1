//! Interaction rules for the market floor plan.
//!
//! Everything here is a function of explicit inputs (item, mode, role,
//! policy). No module keeps ambient state beyond the small machines it
//! exposes:
//! - [`access`] - Capability checks against an [`AccessPolicy`]
//! - [`mode`] - Navigate / Edit(Move) / Edit(Erase) controller
//! - [`drag`] - Single-item drag machine and pointer coordinate mapping
//! - [`hit`] - Appearance and enabled interactions per item
//! - [`workflow`] - Table status changes and customer reservations

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod access;
pub mod drag;
pub mod hit;
pub mod mode;
pub mod workflow;

pub use access::{AccessDecision, AccessPolicy, Capability, RolePolicy};
pub use drag::{Container, DragState};
pub use hit::{Affordance, Appearance, ClickAction, Cursor, Shape, Tone, affordance};
pub use mode::{EditTool, Mode, ModeController};
pub use workflow::{Reservation, StatusChange};
