//! Core types for the market floor plan.
//!
//! This crate provides:
//! - [`ItemId`] - Monotonic, never-reused layout item identifiers
//! - [`ItemType`] - The closed set of placeable item types
//! - [`TableStatus`] - Status board states for table items
//! - [`Position`] / [`Size`] - Percentage geometry with clamping
//! - [`Actor`] / [`Role`] - The acting user passed in by the host session
//! - [`Error`] - Error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod actor;
pub mod error;
pub mod geometry;
pub mod id;
pub mod item_type;
pub mod status;

pub use actor::{Actor, Role, UserId};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use geometry::{Position, Size, clamp_percent};
pub use id::{ItemId, StallId};
pub use item_type::ItemType;
pub use status::TableStatus;
