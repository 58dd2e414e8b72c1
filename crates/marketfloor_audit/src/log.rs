//! Ring buffer for audit records.
//!
//! Keeps the most recent records of a session, discarding the oldest when
//! full.

use std::collections::{HashMap, VecDeque};

use marketfloor_foundation::UserId;

use crate::record::{AuditEvent, AuditRecord};

// =============================================================================
// Audit Log
// =============================================================================

/// A bounded log of audit records, oldest first.
#[derive(Clone, Debug)]
pub struct AuditLog {
    /// The records, oldest first.
    records: VecDeque<AuditRecord>,
    /// Maximum number of records to store.
    max_size: usize,
    /// Next record ID to assign.
    next_id: u64,
}

impl AuditLog {
    /// Creates a log holding at most `max_size` records.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_size.min(1024)),
            max_size,
            next_id: 0,
        }
    }

    /// Creates a log with the default size (1000 records).
    #[must_use]
    pub fn default_size() -> Self {
        Self::new(1000)
    }

    /// Appends an event, returning the assigned record ID.
    pub fn push(
        &mut self,
        interaction: u64,
        timestamp_ns: u64,
        actor: UserId,
        event: AuditEvent,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.records.push_back(AuditRecord {
            id,
            interaction,
            timestamp_ns,
            actor,
            event,
        });

        while self.records.len() > self.max_size {
            self.records.pop_front();
        }

        id
    }

    /// Returns the number of records in the log.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Clears all records. IDs keep increasing afterwards.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Returns an iterator over all records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &AuditRecord> {
        self.records.iter()
    }

    /// Returns the most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&AuditRecord> {
        self.records.back()
    }

    /// Returns the most recent `count` records, oldest first.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<&AuditRecord> {
        let start = self.records.len().saturating_sub(count);
        self.records.iter().skip(start).collect()
    }

    /// Returns records matching a predicate.
    pub fn filter<F>(&self, predicate: F) -> Vec<&AuditRecord>
    where
        F: Fn(&AuditRecord) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// Returns records of a specific event type.
    #[must_use]
    pub fn by_event_type(&self, event_type: &str) -> Vec<&AuditRecord> {
        self.filter(|r| r.event_type() == event_type)
    }

    /// Returns records produced by one user.
    #[must_use]
    pub fn by_actor(&self, actor: &UserId) -> Vec<&AuditRecord> {
        self.filter(|r| &r.actor == actor)
    }

    /// Returns statistics about the log.
    #[must_use]
    pub fn stats(&self) -> AuditLogStats {
        let mut event_counts = HashMap::new();
        for record in &self.records {
            *event_counts.entry(record.event_type()).or_insert(0) += 1;
        }

        AuditLogStats {
            record_count: self.records.len(),
            max_size: self.max_size,
            total_recorded: self.next_id,
            event_counts,
        }
    }
}

impl Default for AuditLog {
    fn default() -> Self {
        Self::default_size()
    }
}

// =============================================================================
// Log Statistics
// =============================================================================

/// Statistics about an audit log.
#[derive(Clone, Debug)]
pub struct AuditLogStats {
    /// Number of records currently held.
    pub record_count: usize,
    /// Maximum log size.
    pub max_size: usize,
    /// Records ever pushed, including evicted ones.
    pub total_recorded: u64,
    /// Count of each event type.
    pub event_counts: HashMap<&'static str, usize>,
}

// =============================================================================
// Tests
// =============================================================================
