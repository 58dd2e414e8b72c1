//! Audit output formatters.
//!
//! Provides human-readable and JSON formatters for audit records.

use serde_json::{Value, json};

use crate::record::{AuditEvent, AuditRecord};

// =============================================================================
// Audit Formatter Trait
// =============================================================================

/// Trait for formatting audit records.
pub trait AuditFormatter {
    /// Formats a single audit record to a string.
    fn format(&self, record: &AuditRecord) -> String;

    /// Formats multiple records, one per line.
    fn format_many(&self, records: &[&AuditRecord]) -> String {
        records
            .iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats audit records in human-readable form.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
    /// Whether to include record IDs.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Builder method to show record IDs.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }

    /// Formats timestamp in microseconds.
    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1_000_000 {
            format!("{:.3}s", us as f64 / 1_000_000.0)
        } else if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }

    fn describe(event: &AuditEvent) -> String {
        match event {
            AuditEvent::ModeChanged { from, to } => format!("MODE {from} -> {to}"),
            AuditEvent::ItemAdded { item, item_type } => format!("ADD {item} ({item_type})"),
            AuditEvent::ItemRemoved {
                item,
                item_type,
                label,
            } => format!("ERASE {item} ({item_type} \"{label}\")"),
            AuditEvent::ItemMoved { item, position } => {
                format!("MOVE {item} to ({:.1}, {:.1})", position.x(), position.y())
            }
            AuditEvent::StatusChanged { table, from, to } => {
                format!("STATUS {table} {from} -> {to}")
            }
            AuditEvent::ReservationConfirmed {
                table,
                label,
                capacity,
            } => format!("RESERVE {table} (\"{label}\", {capacity} seats)"),
            AuditEvent::PointOfSaleOpened { stall } => format!("POS {stall}"),
            AuditEvent::ActionRejected { action, reason } => {
                format!("REJECT {action}: {reason}")
            }
        }
    }
}

impl AuditFormatter for HumanFormatter {
    fn format(&self, record: &AuditRecord) -> String {
        use std::fmt::Write;
        let mut prefix = String::new();

        if self.show_ids {
            let _ = write!(prefix, "[{:06}] ", record.id);
        }

        let _ = write!(prefix, "#{:04} ", record.interaction);

        if self.show_timestamps {
            let _ = write!(
                prefix,
                "{:>10} ",
                Self::format_timestamp(record.timestamp_ns)
            );
        }

        format!("{prefix}{} {}", record.actor, Self::describe(&record.event))
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats audit records as JSON objects.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print JSON.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Creates a compact JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to pretty-print.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Converts a record to a JSON value.
    #[must_use]
    pub fn to_value(record: &AuditRecord) -> Value {
        let data = match &record.event {
            AuditEvent::ModeChanged { from, to } => {
                json!({ "from": from.to_string(), "to": to.to_string() })
            }
            AuditEvent::ItemAdded { item, item_type } => {
                json!({ "item": item.raw(), "item_type": item_type.name() })
            }
            AuditEvent::ItemRemoved {
                item,
                item_type,
                label,
            } => json!({ "item": item.raw(), "item_type": item_type.name(), "label": label }),
            AuditEvent::ItemMoved { item, position } => {
                json!({ "item": item.raw(), "x": position.x(), "y": position.y() })
            }
            AuditEvent::StatusChanged { table, from, to } => {
                json!({ "table": table.raw(), "from": from.tag(), "to": to.tag() })
            }
            AuditEvent::ReservationConfirmed {
                table,
                label,
                capacity,
            } => json!({ "table": table.raw(), "label": label, "capacity": capacity.get() }),
            AuditEvent::PointOfSaleOpened { stall } => json!({ "stall": stall.0 }),
            AuditEvent::ActionRejected { action, reason } => {
                json!({ "action": action, "reason": reason })
            }
        };

        json!({
            "id": record.id,
            "interaction": record.interaction,
            "timestamp_ns": record.timestamp_ns,
            "actor": record.actor.as_str(),
            "event": record.event_type(),
            "data": data,
        })
    }
}

impl AuditFormatter for JsonFormatter {
    fn format(&self, record: &AuditRecord) -> String {
        let value = Self::to_value(record);
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        rendered.unwrap_or_default()
    }
}

// =============================================================================
// Tests
// =============================================================================
