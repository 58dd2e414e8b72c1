//! Audit trail and user notifications for the market floor plan.
//!
//! Every change to the plan, and every refused action, is offered to the
//! [`Auditor`]. It keeps a bounded [`AuditLog`], mirrors events to `tracing`,
//! and forwards user-facing [`Notice`]s to registered [`Notifier`]s.
//!
//! Reservations record the reserving user here rather than on the table.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod format;
pub mod log;
pub mod notify;
pub mod record;

pub use format::{AuditFormatter, HumanFormatter, JsonFormatter};
pub use log::{AuditLog, AuditLogStats};
pub use notify::{CollectingNotifier, Notice, NoticeLevel, Notifier};
pub use record::{AuditEvent, AuditRecord};

use std::fmt;
use std::time::Instant;

use marketfloor_foundation::UserId;
use tracing::{info, warn};

// =============================================================================
// Auditor Configuration
// =============================================================================

/// Configuration for the auditor.
#[derive(Clone, Debug)]
pub struct AuditConfig {
    /// Whether events are kept in the audit log.
    pub enabled: bool,
    /// Maximum records to keep in the log.
    pub buffer_size: usize,
    /// Whether events are mirrored to `tracing`.
    pub emit_tracing: bool,
    /// Event types to keep (empty = all).
    pub event_filter: Vec<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            buffer_size: 1000,
            emit_tracing: true,
            event_filter: Vec::new(),
        }
    }
}

impl AuditConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that keeps no log and emits nothing.
    ///
    /// Notifiers still receive notices.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            emit_tracing: false,
            ..Self::default()
        }
    }

    /// Builder method to set the log size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to enable/disable `tracing` output.
    #[must_use]
    pub fn with_tracing(mut self, emit: bool) -> Self {
        self.emit_tracing = emit;
        self
    }

    /// Builder method to keep only some event types.
    #[must_use]
    pub fn filter_events(mut self, types: Vec<String>) -> Self {
        self.event_filter = types;
        self
    }

    fn keeps(&self, event_type: &str) -> bool {
        self.event_filter.is_empty() || self.event_filter.iter().any(|t| t == event_type)
    }
}

// =============================================================================
// Auditor
// =============================================================================

/// Records audit events and delivers notices.
pub struct Auditor {
    config: AuditConfig,
    log: AuditLog,
    interaction: u64,
    start_time: Instant,
    notifiers: Vec<Box<dyn Notifier>>,
}

impl fmt::Debug for Auditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auditor")
            .field("config", &self.config)
            .field("records", &self.log.len())
            .field("interaction", &self.interaction)
            .field("notifiers", &self.notifiers.len())
            .finish_non_exhaustive()
    }
}

impl Default for Auditor {
    fn default() -> Self {
        Self::new(AuditConfig::default())
    }
}

impl Auditor {
    /// Creates an auditor with the given configuration.
    #[must_use]
    pub fn new(config: AuditConfig) -> Self {
        let buffer_size = config.buffer_size;
        Self {
            config,
            log: AuditLog::new(buffer_size),
            interaction: 0,
            start_time: Instant::now(),
            notifiers: Vec::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Registers a notifier.
    pub fn add_notifier(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Marks the start of a new host interaction and returns its number.
    pub fn begin_interaction(&mut self) -> u64 {
        self.interaction += 1;
        self.interaction
    }

    /// Returns the current interaction number.
    #[must_use]
    pub fn interaction(&self) -> u64 {
        self.interaction
    }

    /// Records an event by `actor`.
    ///
    /// Notices go out regardless of configuration. Returns the record ID if
    /// the event was kept in the log.
    pub fn record(&mut self, actor: &UserId, event: AuditEvent) -> Option<u64> {
        if let Some(notice) = Notice::for_event(&event) {
            for notifier in &mut self.notifiers {
                notifier.notify(&notice);
            }
        }

        if self.config.emit_tracing {
            Self::emit(actor, &event);
        }

        if !self.config.enabled || !self.config.keeps(event.event_type()) {
            return None;
        }

        #[allow(clippy::cast_possible_truncation)]
        let timestamp_ns = self.start_time.elapsed().as_nanos() as u64;
        Some(
            self.log
                .push(self.interaction, timestamp_ns, actor.clone(), event),
        )
    }

    fn emit(actor: &UserId, event: &AuditEvent) {
        let item = event.item().map(|id| id.to_string()).unwrap_or_default();
        match event {
            AuditEvent::ActionRejected { action, reason } => {
                warn!(
                    target: "marketfloor::audit",
                    actor = %actor,
                    action,
                    reason = %reason,
                    "action rejected"
                );
            }
            _ => {
                info!(
                    target: "marketfloor::audit",
                    actor = %actor,
                    event = event.event_type(),
                    item = %item,
                    "floor plan event"
                );
            }
        }
    }

    /// Returns the audit log.
    #[must_use]
    pub fn log(&self) -> &AuditLog {
        &self.log
    }

    /// Clears the audit log.
    pub fn clear(&mut self) {
        self.log.clear();
    }

    /// Formats the most recent `count` records.
    #[must_use]
    pub fn format_recent(&self, count: usize, formatter: &dyn AuditFormatter) -> String {
        formatter.format_many(&self.log.recent(count))
    }
}

// =============================================================================
// Tests
// =============================================================================
