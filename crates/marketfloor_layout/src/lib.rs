//! Layout store for the market floor plan.
//!
//! This crate provides:
//! - [`LayoutItem`] - A placed stall, table, decor piece or path
//! - [`ItemKind`] - Type-specific item data (table state, stall link)
//! - [`LayoutStore`] - The ordered, id-keyed item collection and its mutations
//! - [`LayoutSnapshot`] - A cheap, read-only copy of the collection for rendering
//! - [`LayoutConfig`] - Creation defaults
//! - [`seed`] - The fixed initial market plan

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod item;
pub mod seed;
pub mod store;

pub use config::LayoutConfig;
pub use item::{ItemKind, LayoutItem, TableState};
pub use seed::SeedItem;
pub use store::{LayoutSnapshot, LayoutStore};
