//! Audit trail and notices produced by a session

use std::cell::RefCell;
use std::rc::Rc;

use marketfloor_audit::{
    AuditConfig, AuditFormatter, CollectingNotifier, JsonFormatter, NoticeLevel,
};
use marketfloor_foundation::{Actor, ItemType, TableStatus};
use marketfloor_layout::SeedItem;
use marketfloor_session::{FloorSession, PointerEvent, SessionConfig, Signal};

fn quiet() -> SessionConfig {
    SessionConfig::empty().with_audit(AuditConfig::new().with_tracing(false))
}

#[test]
fn reservation_is_recorded_with_customer() {
    let customer = Actor::customer("u2", "Budi");
    let seed = vec![SeedItem::new(ItemType::Table, 30.0, 40.0).labelled("T1")];
    let mut session = FloorSession::new(customer.clone(), quiet().with_seed(seed));
    let notes = Rc::new(RefCell::new(CollectingNotifier::new()));
    session.add_notifier(Box::new(Rc::clone(&notes)));

    let table = session.store().ids().next().unwrap();
    session.click(table);
    session.confirm_reservation();

    let log = session.auditor().log();
    let records = log.by_event_type("reservation-confirmed");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].actor, customer.user);

    let notices = notes.borrow_mut().drain();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Success);
    assert_eq!(notices[0].message, "T1 is reserved for you (4 seats)");
}

#[test]
fn rejection_warns_the_user() {
    let customer = Actor::customer("u2", "Budi");
    let mut session = FloorSession::new(customer, quiet());
    let notes = Rc::new(RefCell::new(CollectingNotifier::new()));
    session.add_notifier(Box::new(Rc::clone(&notes)));

    let signals = session.add_item(ItemType::Tree);
    assert!(signals[0].is_rejection());

    let notices = notes.borrow().notices().to_vec();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Warning);
    assert_eq!(notices[0].message, "only market staff can arrange the layout");
}

#[test]
fn editing_session_leaves_a_trail() {
    let admin = Actor::admin("a1", "Rina");
    let mut session = FloorSession::new(admin, quiet());

    session.toggle_arrange();
    session.add_item(ItemType::Table);
    let table = session.store().ids().next().unwrap();
    session.pointer(PointerEvent::Down {
        target: Some(table),
        x: 50.0,
        y: 50.0,
    });
    session.pointer(PointerEvent::Move { x: 20.0, y: 30.0 });
    session.pointer(PointerEvent::Move { x: 25.0, y: 35.0 });
    session.pointer(PointerEvent::Up);
    session.done_editing();
    session.click(table);
    session.choose_status(TableStatus::Ordering);

    let types: Vec<_> = session
        .auditor()
        .log()
        .iter()
        .map(|r| r.event_type())
        .collect();
    assert_eq!(
        types,
        vec![
            "mode-changed",
            "item-added",
            "item-moved",
            "mode-changed",
            "status-changed",
        ]
    );
}

#[test]
fn records_render_as_json() {
    let admin = Actor::admin("a1", "Rina");
    let mut session = FloorSession::new(admin, quiet());
    session.toggle_arrange();
    session.add_item(ItemType::Pole);

    let log = session.auditor().log();
    let line = JsonFormatter::new().format(log.last().unwrap());
    let value: serde_json::Value = serde_json::from_str(&line).unwrap();

    assert_eq!(value["event"], "item-added");
    assert_eq!(value["actor"], "a1");
    assert_eq!(value["data"]["item_type"], "Pole");
}

#[test]
fn disabled_audit_still_signals() {
    let admin = Actor::admin("a1", "Rina");
    let config = SessionConfig::empty().with_audit(AuditConfig::disabled());
    let mut session = FloorSession::new(admin, config);

    let signals = session.toggle_arrange();
    assert!(matches!(signals[..], [Signal::ModeChanged { .. }]));
    assert!(session.auditor().log().is_empty());
}

#[test]
fn click_without_drag_records_no_move() {
    let admin = Actor::admin("a1", "Rina");
    let mut session = FloorSession::new(admin, quiet());
    session.toggle_arrange();
    session.add_item(ItemType::Tree);
    let tree = session.store().ids().next().unwrap();
    let before = session.store().get(tree).unwrap().position();

    session.pointer(PointerEvent::Down {
        target: Some(tree),
        x: 50.0,
        y: 50.0,
    });
    session.pointer(PointerEvent::Up);

    assert_eq!(session.store().get(tree).unwrap().position(), before);
    assert!(session.auditor().log().by_event_type("item-moved").is_empty());
}

#[test]
fn drag_end_gets_its_own_interaction() {
    let admin = Actor::admin("a1", "Rina");
    let mut session = FloorSession::new(admin, quiet());
    session.toggle_arrange();
    session.add_item(ItemType::Tree);
    let tree = session.store().ids().next().unwrap();

    session.pointer(PointerEvent::Down {
        target: Some(tree),
        x: 50.0,
        y: 50.0,
    });
    let press = session.auditor().interaction();
    session.pointer(PointerEvent::Move { x: 10.0, y: 10.0 });
    session.pointer(PointerEvent::Leave);

    let moved = session.auditor().log().by_event_type("item-moved");
    assert_eq!(moved.len(), 1);
    assert_eq!(moved[0].interaction, press + 1);
}
