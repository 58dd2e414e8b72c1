//! The floor plan session.
//!
//! [`FloorSession`] is the single owner of the layout for one user. Each
//! handler processes one host event to completion and returns the
//! [`Signal`]s the host should act on. Refused actions never panic: they
//! come back as [`Signal::Rejected`] and are recorded by the auditor.

use marketfloor_audit::{AuditEvent, Auditor, Notifier};
use marketfloor_foundation::{
    Actor, Error, ErrorContext, ErrorKind, ItemId, ItemType, Position, Result, TableStatus,
};
use marketfloor_interaction::{
    AccessPolicy, Affordance, Capability, ClickAction, Container, DragState, Mode, ModeController,
    RolePolicy, affordance, workflow,
};
use marketfloor_layout::{LayoutItem, LayoutSnapshot, LayoutStore};
use tracing::{debug, instrument, warn};

use crate::config::SessionConfig;
use crate::event::{KeyEvent, PointerEvent, Signal};

/// The dialog currently open over the floor plan.
///
/// Dialogs refer to their table by id only; the item is looked up again
/// when the dialog is confirmed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Dialog {
    /// No dialog.
    #[default]
    None,
    /// Admin status editor for a table.
    StatusEditor(ItemId),
    /// Customer reservation dialog for a table.
    Reservation(ItemId),
}

impl Dialog {
    /// Returns true if a dialog is open.
    #[must_use]
    pub fn is_open(self) -> bool {
        self != Self::None
    }

    /// The table the dialog refers to.
    #[must_use]
    pub fn table(self) -> Option<ItemId> {
        match self {
            Self::None => None,
            Self::StatusEditor(id) | Self::Reservation(id) => Some(id),
        }
    }
}

/// One user's session on the market floor plan.
pub struct FloorSession {
    store: LayoutStore,
    mode: ModeController,
    drag: DragState,
    // Where the dragged item started, to tell a real move from a click.
    drag_origin: Option<Position>,
    dialog: Dialog,
    container: Container,
    actor: Actor,
    policy: Box<dyn AccessPolicy>,
    auditor: Auditor,
}

impl std::fmt::Debug for FloorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloorSession")
            .field("actor", &self.actor)
            .field("mode", &self.mode.mode())
            .field("items", &self.store.len())
            .field("dragging", &self.drag.dragging())
            .field("dialog", &self.dialog)
            .finish_non_exhaustive()
    }
}

impl FloorSession {
    /// Creates a session for `actor` using the role-based access policy.
    #[must_use]
    pub fn new(actor: Actor, config: SessionConfig) -> Self {
        Self::with_policy(actor, config, Box::new(RolePolicy))
    }

    /// Creates a session with a custom access policy.
    #[must_use]
    pub fn with_policy(actor: Actor, config: SessionConfig, policy: Box<dyn AccessPolicy>) -> Self {
        let SessionConfig {
            layout,
            audit,
            container,
            seed,
        } = config;
        debug!(actor = %actor, seed = seed.len(), "starting floor session");
        Self {
            store: LayoutStore::from_seed(layout, &seed),
            mode: ModeController::new(),
            drag: DragState::new(),
            drag_origin: None,
            dialog: Dialog::None,
            container,
            actor,
            policy,
            auditor: Auditor::new(audit),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The acting user.
    #[must_use]
    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    /// The current interaction mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode.mode()
    }

    /// The open dialog.
    #[must_use]
    pub fn dialog(&self) -> Dialog {
        self.dialog
    }

    /// The item being dragged.
    #[must_use]
    pub fn dragging(&self) -> Option<ItemId> {
        self.drag.dragging()
    }

    /// The container size used to convert pointer coordinates.
    #[must_use]
    pub fn container(&self) -> Container {
        self.container
    }

    /// Read access to the layout store.
    #[must_use]
    pub fn store(&self) -> &LayoutStore {
        &self.store
    }

    /// Snapshot of the items for rendering.
    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot {
        self.store.snapshot()
    }

    /// How `id` should be drawn and what it responds to right now.
    #[must_use]
    pub fn affordance(&self, id: ItemId) -> Option<Affordance> {
        let item = self.store.get(id)?;
        Some(affordance(item, self.mode.mode(), self.actor.role))
    }

    /// Affordances for every item, in insertion order.
    #[must_use]
    pub fn affordances(&self) -> Vec<(ItemId, Affordance)> {
        let mode = self.mode.mode();
        self.store
            .iter()
            .map(|item| (item.id(), affordance(item, mode, self.actor.role)))
            .collect()
    }

    /// The auditor.
    #[must_use]
    pub fn auditor(&self) -> &Auditor {
        &self.auditor
    }

    /// Registers a notifier for user-facing notices.
    pub fn add_notifier(&mut self, notifier: Box<dyn Notifier>) {
        self.auditor.add_notifier(notifier);
    }

    /// Updates the container size after a host resize.
    pub fn set_container(&mut self, container: Container) {
        self.container = container;
    }

    // =========================================================================
    // Toolbar Commands
    // =========================================================================

    /// Switches between navigating and editing.
    #[instrument(level = "debug", skip(self), fields(actor = %self.actor.user))]
    pub fn toggle_arrange(&mut self) -> Vec<Signal> {
        self.auditor.begin_interaction();
        let mut signals = self.settle();
        let from = self.mode.mode();
        let result = self.mode.toggle_arrange(&self.actor, self.policy.as_ref());
        signals.push(self.mode_outcome("arrange", from, result));
        signals
    }

    /// Switches the edit tool between moving and erasing.
    #[instrument(level = "debug", skip(self), fields(actor = %self.actor.user))]
    pub fn toggle_eraser(&mut self) -> Vec<Signal> {
        self.auditor.begin_interaction();
        let mut signals = self.settle();
        let from = self.mode.mode();
        let result = self.mode.toggle_eraser(&self.actor, self.policy.as_ref());
        signals.push(self.mode_outcome("eraser", from, result));
        signals
    }

    /// Leaves editing.
    #[instrument(level = "debug", skip(self), fields(actor = %self.actor.user))]
    pub fn done_editing(&mut self) -> Vec<Signal> {
        self.auditor.begin_interaction();
        let mut signals = self.settle();
        let from = self.mode.mode();
        let to = self.mode.done_editing();
        if from != to {
            signals.push(self.mode_outcome("done", from, Ok(to)));
        }
        signals
    }

    /// Places a new item of `item_type` at the spawn position.
    #[instrument(level = "debug", skip(self), fields(actor = %self.actor.user))]
    pub fn add_item(&mut self, item_type: ItemType) -> Vec<Signal> {
        self.auditor.begin_interaction();
        match self.check_editing() {
            Ok(()) => {
                let item = self.store.add_item(item_type);
                self.record(AuditEvent::ItemAdded { item, item_type });
                vec![Signal::ItemAdded { item, item_type }]
            }
            Err(err) => vec![self.reject("add", err)],
        }
    }

    // =========================================================================
    // Pointer And Keyboard
    // =========================================================================

    /// Handles a click on an item.
    ///
    /// Clicks are ignored while a dialog is open.
    #[instrument(level = "debug", skip(self), fields(actor = %self.actor.user))]
    pub fn click(&mut self, target: ItemId) -> Vec<Signal> {
        self.auditor.begin_interaction();
        if self.dialog.is_open() {
            debug!(dialog = ?self.dialog, "click ignored behind dialog");
            return Vec::new();
        }
        let Some(item) = self.store.get(target) else {
            debug!(%target, "click on missing item");
            return Vec::new();
        };
        let Some(action) = affordance(item, self.mode.mode(), self.actor.role).click else {
            return Vec::new();
        };

        match self.perform(target, action) {
            Ok(signal) => vec![signal],
            Err(err) => vec![self.reject(action_name(action), err)],
        }
    }

    /// Handles pointer input over the floor plan.
    #[instrument(level = "trace", skip(self))]
    pub fn pointer(&mut self, event: PointerEvent) -> Vec<Signal> {
        match event {
            PointerEvent::Down { target: Some(id), .. } => self.press(id),
            PointerEvent::Down { target: None, .. } => Vec::new(),
            PointerEvent::Move { x, y } => {
                let Some(item) = self.drag.dragging() else {
                    return Vec::new();
                };
                let (px, py) = self.container.to_percent(x, y);
                match self.drag.update_drag(&mut self.store, px, py) {
                    Some(position) => vec![Signal::ItemMoved { item, position }],
                    None => {
                        debug!(%item, "dragged item disappeared");
                        self.drag_origin = None;
                        vec![Signal::DragEnded {
                            item,
                            position: None,
                        }]
                    }
                }
            }
            PointerEvent::Up | PointerEvent::Leave => {
                if !self.drag.is_dragging() {
                    return Vec::new();
                }
                self.auditor.begin_interaction();
                self.finish_drag().into_iter().collect()
            }
        }
    }

    /// Handles keyboard input.
    #[instrument(level = "debug", skip(self))]
    pub fn key(&mut self, event: KeyEvent) -> Vec<Signal> {
        match event {
            KeyEvent::Escape => {
                if self.drag.is_dragging() || self.dialog.is_open() {
                    self.auditor.begin_interaction();
                }
                self.settle()
            }
        }
    }

    // =========================================================================
    // Dialogs
    // =========================================================================

    /// Applies `status` to the table in the open status editor and closes it.
    #[instrument(level = "debug", skip(self), fields(actor = %self.actor.user))]
    pub fn choose_status(&mut self, status: TableStatus) -> Vec<Signal> {
        self.auditor.begin_interaction();
        let Dialog::StatusEditor(table) = self.dialog else {
            return vec![self.reject("status", Error::new(ErrorKind::NoDialog))];
        };
        self.dialog = Dialog::None;

        let policy = self.policy.as_ref();
        match workflow::set_status(&mut self.store, &self.actor, policy, table, status) {
            Ok(change) => {
                self.record(AuditEvent::StatusChanged {
                    table,
                    from: change.from,
                    to: change.to,
                });
                vec![Signal::StatusChanged {
                    table,
                    from: change.from,
                    to: change.to,
                }]
            }
            Err(err) => vec![self.reject("status", err)],
        }
    }

    /// Confirms the open reservation dialog and closes it.
    #[instrument(level = "debug", skip(self), fields(actor = %self.actor.user))]
    pub fn confirm_reservation(&mut self) -> Vec<Signal> {
        self.auditor.begin_interaction();
        let Dialog::Reservation(table) = self.dialog else {
            return vec![self.reject("reserve", Error::new(ErrorKind::NoDialog))];
        };
        self.dialog = Dialog::None;

        match workflow::reserve(&mut self.store, &self.actor, self.policy.as_ref(), table) {
            Ok(reservation) => {
                let reserved_by = reservation.reserved_by.clone();
                self.record(AuditEvent::ReservationConfirmed {
                    table,
                    label: reservation.label,
                    capacity: reservation.capacity,
                });
                vec![Signal::ReservationConfirmed { table, reserved_by }]
            }
            Err(err) => vec![self.reject("reserve", err)],
        }
    }

    /// Closes the open dialog without changes.
    pub fn cancel_dialog(&mut self) -> Vec<Signal> {
        self.close_dialog().into_iter().collect()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn perform(&mut self, target: ItemId, action: ClickAction) -> Result<Signal> {
        let policy = self.policy.as_ref();
        match action {
            ClickAction::OpenStatusEditor => {
                policy.require(&self.actor, Capability::EditTableStatus)?;
                self.dialog = Dialog::StatusEditor(target);
                Ok(Signal::StatusEditorOpened { table: target })
            }
            ClickAction::OpenReservation => {
                workflow::check_reservable(&self.store, &self.actor, policy, target)?;
                self.dialog = Dialog::Reservation(target);
                Ok(Signal::ReservationOpened { table: target })
            }
            ClickAction::SwitchToPointOfSale(stall) => {
                policy.require(&self.actor, Capability::OpenPointOfSale)?;
                self.record(AuditEvent::PointOfSaleOpened { stall });
                Ok(Signal::SwitchToPointOfSale(stall))
            }
            ClickAction::Erase => {
                self.check_editing()?;
                let removed = self
                    .store
                    .remove_item(target)
                    .ok_or_else(|| Error::item_not_found(target))?;
                self.record(removed_event(&removed));
                Ok(Signal::ItemRemoved { item: target })
            }
        }
    }

    fn press(&mut self, id: ItemId) -> Vec<Signal> {
        if self.dialog.is_open() {
            return Vec::new();
        }
        let draggable = self.affordance(id).is_some_and(|a| a.draggable);
        if !draggable {
            return Vec::new();
        }
        self.auditor.begin_interaction();
        match self
            .drag
            .begin_drag(&self.store, id, self.mode.mode(), self.actor.role)
        {
            Ok(()) => {
                self.drag_origin = self.store.get(id).map(LayoutItem::position);
                vec![Signal::DragStarted { item: id }]
            }
            Err(err) => {
                debug!(%id, error = %err, "drag not started");
                Vec::new()
            }
        }
    }

    fn finish_drag(&mut self) -> Option<Signal> {
        let item = self.drag.end_drag()?;
        let origin = self.drag_origin.take();
        let position = self.store.get(item).map(LayoutItem::position);
        if let Some(position) = position.filter(|&p| Some(p) != origin) {
            self.record(AuditEvent::ItemMoved { item, position });
        }
        Some(Signal::DragEnded { item, position })
    }

    fn close_dialog(&mut self) -> Option<Signal> {
        if !self.dialog.is_open() {
            return None;
        }
        self.dialog = Dialog::None;
        Some(Signal::DialogClosed)
    }

    /// Ends any drag and closes any dialog.
    fn settle(&mut self) -> Vec<Signal> {
        self.finish_drag()
            .into_iter()
            .chain(self.close_dialog())
            .collect()
    }

    fn check_editing(&self) -> Result<()> {
        self.policy.require(&self.actor, Capability::ArrangeLayout)?;
        if !self.mode.mode().is_editing() {
            return Err(Error::invalid_mode(format!(
                "cannot change the layout in {} mode",
                self.mode.mode()
            )));
        }
        Ok(())
    }

    fn mode_outcome(&mut self, action: &'static str, from: Mode, result: Result<Mode>) -> Signal {
        match result {
            Ok(to) => {
                self.record(AuditEvent::ModeChanged { from, to });
                Signal::ModeChanged { from, to }
            }
            Err(err) => self.reject(action, err),
        }
    }

    fn record(&mut self, event: AuditEvent) {
        self.auditor.record(&self.actor.user, event);
    }

    fn contextualize(&self, action: &'static str, err: Error) -> Error {
        err.with_context(
            ErrorContext::new()
                .with_operation(action)
                .with_actor(self.actor.user.as_str()),
        )
    }

    fn reject(&mut self, action: &'static str, err: Error) -> Signal {
        let err = self.contextualize(action, err);
        let reason = match &err.kind {
            ErrorKind::PermissionDenied(reason) => reason.clone(),
            _ => err.to_string(),
        };
        let context = err.context.as_ref().map(ToString::to_string).unwrap_or_default();
        warn!(action, error = %err, context = %context, "rejected");
        self.record(AuditEvent::ActionRejected {
            action,
            reason: reason.clone(),
        });
        Signal::Rejected { action, reason }
    }
}

fn action_name(action: ClickAction) -> &'static str {
    match action {
        ClickAction::OpenStatusEditor => "status",
        ClickAction::OpenReservation => "reserve",
        ClickAction::SwitchToPointOfSale(_) => "pos",
        ClickAction::Erase => "erase",
    }
}

fn removed_event(item: &LayoutItem) -> AuditEvent {
    AuditEvent::ItemRemoved {
        item: item.id(),
        item_type: item.item_type(),
        label: item.label().to_string(),
    }
}

// =============================================================================
// Tests
// =============================================================================
