//! Synchronous user notifications.
//!
//! The host shows these as a toast or a confirmation dialog. Delivery is
//! synchronous: `notify` returns once the host has taken the notice.

use std::cell::RefCell;
use std::rc::Rc;

use crate::record::AuditEvent;

/// How a notice should be presented.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    /// The action completed.
    Success,
    /// The action was refused.
    Warning,
}

/// A message for the acting user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Presentation level.
    pub level: NoticeLevel,
    /// Text to show.
    pub message: String,
}

impl Notice {
    /// Builds the user-facing notice for an event, if it warrants one.
    ///
    /// Only completed reservations, status changes and refusals notify;
    /// layout edits are visible on the plan itself.
    #[must_use]
    pub fn for_event(event: &AuditEvent) -> Option<Self> {
        match event {
            AuditEvent::ReservationConfirmed {
                label, capacity, ..
            } => Some(Self {
                level: NoticeLevel::Success,
                message: format!("{label} is reserved for you ({capacity} seats)"),
            }),
            AuditEvent::StatusChanged { from, to, .. } if from != to => Some(Self {
                level: NoticeLevel::Success,
                message: format!("Table marked {to}"),
            }),
            AuditEvent::ActionRejected { reason, .. } => Some(Self {
                level: NoticeLevel::Warning,
                message: reason.clone(),
            }),
            _ => None,
        }
    }
}

/// Receives notices for the acting user.
pub trait Notifier {
    /// Delivers a notice.
    fn notify(&mut self, notice: &Notice);
}

/// Notifier that keeps every notice, for hosts that render them later.
#[derive(Clone, Debug, Default)]
pub struct CollectingNotifier {
    notices: Vec<Notice>,
}

impl CollectingNotifier {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far.
    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Takes all received notices.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}

// Lets a host keep a handle on a notifier it also hands to the session.
impl<N: Notifier + ?Sized> Notifier for Rc<RefCell<N>> {
    fn notify(&mut self, notice: &Notice) {
        self.borrow_mut().notify(notice);
    }
}
