//! Floor plan session for the market view.
//!
//! A [`FloorSession`] owns the layout store for one user session and turns
//! host input (clicks, pointer and key events, toolbar commands) into
//! store mutations and [`Signal`]s for the host to act on.
//!
//! Everything runs synchronously on the caller's thread; each handler
//! finishes before the next event is processed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod event;
pub mod session;

pub use config::SessionConfig;
pub use event::{KeyEvent, PointerEvent, Signal};
pub use session::{Dialog, FloorSession};
