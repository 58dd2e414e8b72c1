//! End-to-end floor plan scenarios

use marketfloor_audit::AuditConfig;
use marketfloor_foundation::{Actor, ItemType, Position, StallId, TableStatus};
use marketfloor_interaction::{EditTool, Mode};
use marketfloor_layout::SeedItem;
use marketfloor_session::{Dialog, FloorSession, PointerEvent, SessionConfig, Signal};

fn quiet() -> SessionConfig {
    SessionConfig::empty().with_audit(AuditConfig::new().with_tracing(false))
}

fn admin() -> Actor {
    Actor::admin("a1", "Rina")
}

fn customer() -> Actor {
    Actor::customer("u2", "Budi")
}

// =============================================================================
// Reservation
// =============================================================================

#[test]
fn customer_reserves_then_table_is_taken() {
    let seed = vec![SeedItem::new(ItemType::Table, 30.0, 40.0)];
    let mut session = FloorSession::new(customer(), quiet().with_seed(seed));
    let table = session.store().ids().next().unwrap();
    assert_eq!(
        session.store().get(table).unwrap().status(),
        Some(TableStatus::Available)
    );

    session.click(table);
    let signals = session.confirm_reservation();
    assert!(matches!(signals[..], [Signal::ReservationConfirmed { .. }]));
    assert_eq!(
        session.store().get(table).unwrap().status(),
        Some(TableStatus::Occupied)
    );

    // A second attempt finds no reservation to open.
    assert!(session.click(table).is_empty());
    assert_eq!(session.dialog(), Dialog::None);
    let again = session.confirm_reservation();
    assert!(again[0].is_rejection());
    assert_eq!(
        session.store().get(table).unwrap().status(),
        Some(TableStatus::Occupied)
    );
}

#[test]
fn sessions_own_separate_plans() {
    let seed = vec![SeedItem::new(ItemType::Table, 30.0, 40.0)];
    let config = quiet().with_seed(seed);
    let mut first = FloorSession::new(customer(), config.clone());
    let table = first.store().ids().next().unwrap();
    first.click(table);
    first.confirm_reservation();

    let mut second = FloorSession::new(customer(), config);
    assert_eq!(second.click(table), vec![Signal::ReservationOpened { table }]);
    assert_eq!(second.dialog(), Dialog::Reservation(table));
}

// =============================================================================
// Dragging
// =============================================================================

#[test]
fn drag_beyond_container_clamps() {
    let seed = vec![SeedItem::new(ItemType::Stall, 10.0, 10.0)];
    let mut session = FloorSession::new(admin(), quiet().with_seed(seed));
    let stall = session.store().ids().next().unwrap();
    session.toggle_arrange();

    session.pointer(PointerEvent::Down {
        target: Some(stall),
        x: 10.0,
        y: 10.0,
    });
    session.pointer(PointerEvent::Move { x: 150.0, y: 150.0 });
    session.pointer(PointerEvent::Up);

    assert_eq!(
        session.store().get(stall).unwrap().position(),
        Position::new(100.0, 100.0)
    );
}

#[test]
fn customer_cannot_drag() {
    let seed = vec![SeedItem::new(ItemType::Table, 10.0, 10.0)];
    let mut session = FloorSession::new(customer(), quiet().with_seed(seed));
    let table = session.store().ids().next().unwrap();

    session.pointer(PointerEvent::Down {
        target: Some(table),
        x: 10.0,
        y: 10.0,
    });
    session.pointer(PointerEvent::Move { x: 80.0, y: 80.0 });

    assert_eq!(session.dragging(), None);
    assert_eq!(
        session.store().get(table).unwrap().position(),
        Position::new(10.0, 10.0)
    );
}

// =============================================================================
// Erasing
// =============================================================================

#[test]
fn erase_click_removes_exactly_one() {
    let mut session = FloorSession::new(admin(), SessionConfig::default());
    let before: Vec<_> = session.store().ids().collect();
    let target = before[3];

    session.toggle_arrange();
    session.toggle_eraser();
    assert_eq!(session.mode(), Mode::Edit(EditTool::Erase));

    let signals = session.click(target);
    assert_eq!(signals, vec![Signal::ItemRemoved { item: target }]);

    let after: Vec<_> = session.store().ids().collect();
    assert_eq!(after.len(), before.len() - 1);
    let expected: Vec<_> = before.into_iter().filter(|&id| id != target).collect();
    assert_eq!(after, expected);
}

#[test]
fn erase_click_on_removed_item_is_silent() {
    let mut session = FloorSession::new(admin(), quiet());
    session.toggle_arrange();
    session.add_item(ItemType::Tree);
    let id = session.store().ids().next().unwrap();
    session.toggle_eraser();

    session.click(id);
    assert!(session.click(id).is_empty());
    assert!(session.store().is_empty());
}

// =============================================================================
// Point Of Sale
// =============================================================================

#[test]
fn stall_click_depends_on_role() {
    let seed = vec![SeedItem::new(ItemType::Stall, 15.0, 20.0).linked_to(StallId(2))];

    let mut staff = FloorSession::new(admin(), quiet().with_seed(seed.clone()));
    let stall = staff.store().ids().next().unwrap();
    assert_eq!(staff.click(stall), vec![Signal::SwitchToPointOfSale(StallId(2))]);

    let mut visitor = FloorSession::new(customer(), quiet().with_seed(seed));
    assert!(visitor.click(stall).is_empty());
}

#[test]
fn unlinked_stall_does_nothing() {
    let seed = vec![SeedItem::new(ItemType::Stall, 15.0, 20.0)];
    let mut session = FloorSession::new(admin(), quiet().with_seed(seed));
    let stall = session.store().ids().next().unwrap();

    assert!(session.click(stall).is_empty());
}

// =============================================================================
// Editing Lifecycle
// =============================================================================

#[test]
fn add_then_done_editing() {
    let mut session = FloorSession::new(admin(), quiet());
    session.toggle_arrange();

    let signals = session.add_item(ItemType::Table);
    let Signal::ItemAdded { item, item_type } = signals[0].clone() else {
        panic!("expected ItemAdded, got {signals:?}");
    };
    assert_eq!(item_type, ItemType::Table);
    assert_eq!(session.store().get(item).unwrap().position(), Position::center());

    assert_eq!(
        session.done_editing(),
        vec![Signal::ModeChanged {
            from: Mode::Edit(EditTool::Move),
            to: Mode::Navigate,
        }]
    );
    assert!(session.done_editing().is_empty());
}

#[test]
fn clicks_behind_dialog_are_ignored() {
    let seed = vec![
        SeedItem::new(ItemType::Table, 10.0, 10.0),
        SeedItem::new(ItemType::Stall, 20.0, 20.0).linked_to(StallId(1)),
    ];
    let mut session = FloorSession::new(admin(), quiet().with_seed(seed));
    let ids: Vec<_> = session.store().ids().collect();

    session.click(ids[0]);
    assert_eq!(session.dialog(), Dialog::StatusEditor(ids[0]));
    assert!(session.click(ids[1]).is_empty());
}
