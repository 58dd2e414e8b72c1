//! Marketfloor - Market floor-plan editor
//!
//! This crate re-exports all layers of the Marketfloor system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: marketfloor_session     - Event dispatch, dialogs, signals
//! Layer 2: marketfloor_interaction - Modes, drag, hit-testing, table workflow
//!          marketfloor_audit       - Audit log, formatters, notices
//! Layer 1: marketfloor_layout      - Layout store, item model, seed plan
//! Layer 0: marketfloor_foundation  - Core types (ItemId, Position, Error)
//! ```

pub use marketfloor_audit as audit;
pub use marketfloor_foundation as foundation;
pub use marketfloor_interaction as interaction;
pub use marketfloor_layout as layout;
pub use marketfloor_session as session;
