//! Error types for the market floor plan.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::id::ItemId;
use crate::item_type::ItemType;
use crate::status::TableStatus;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for floor plan operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an item not found error.
    #[must_use]
    pub fn item_not_found(id: ItemId) -> Self {
        Self::new(ErrorKind::ItemNotFound(id))
    }

    /// Creates a "not a table" error for a table-only operation.
    #[must_use]
    pub fn not_a_table(id: ItemId, actual: ItemType) -> Self {
        Self::new(ErrorKind::NotATable { id, actual })
    }

    /// Creates a "not a stall" error for a stall-only operation.
    #[must_use]
    pub fn not_a_stall(id: ItemId, actual: ItemType) -> Self {
        Self::new(ErrorKind::NotAStall { id, actual })
    }

    /// Creates an invalid capacity error.
    #[must_use]
    pub fn invalid_capacity(capacity: u32) -> Self {
        Self::new(ErrorKind::InvalidCapacity(capacity))
    }

    /// Creates a table unavailable error.
    #[must_use]
    pub fn table_unavailable(id: ItemId, status: TableStatus) -> Self {
        Self::new(ErrorKind::TableUnavailable { id, status })
    }

    /// Creates a permission denied error carrying the policy's reason.
    #[must_use]
    pub fn permission_denied(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::PermissionDenied(reason.into()))
    }

    /// Creates an invalid mode error.
    #[must_use]
    pub fn invalid_mode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidMode(message.into()))
    }

    /// Returns true if this error only reports a missing item.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::ItemNotFound(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// No item with this id exists in the layout.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    /// A table-only operation was applied to another item type.
    #[error("{id} is a {actual}, not a table")]
    NotATable {
        /// The item that was targeted.
        id: ItemId,
        /// Its actual type.
        actual: ItemType,
    },

    /// A stall-only operation was applied to another item type.
    #[error("{id} is a {actual}, not a stall")]
    NotAStall {
        /// The item that was targeted.
        id: ItemId,
        /// Its actual type.
        actual: ItemType,
    },

    /// Table capacity must be positive.
    #[error("invalid table capacity: {0}")]
    InvalidCapacity(u32),

    /// A reservation targeted a table that is not available.
    #[error("table {id} is {status}, not available")]
    TableUnavailable {
        /// The table that was targeted.
        id: ItemId,
        /// Its current status.
        status: TableStatus,
    },

    /// The acting user may not perform this action.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The action is not legal in the current interaction mode.
    #[error("invalid mode: {0}")]
    InvalidMode(String),

    /// A dialog action arrived while no matching dialog was open.
    #[error("no dialog open")]
    NoDialog,
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation that failed (e.g. `set_table_status`).
    pub operation: Option<String>,
    /// The acting user, when known.
    pub actor: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the failing operation.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Sets the acting user.
    #[must_use]
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = &self.operation {
            write!(f, "in {operation}")?;
        }
        if let Some(actor) = &self.actor {
            if self.operation.is_some() {
                write!(f, " ")?;
            }
            write!(f, "by {actor}")?;
        }
        Ok(())
    }
}
