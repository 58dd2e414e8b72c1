//! Integration tests for the mode controller

use marketfloor_foundation::{Actor, ErrorKind};
use marketfloor_interaction::{EditTool, Mode, ModeController, RolePolicy};

#[test]
fn admin_walks_through_every_mode() {
    let admin = Actor::admin("a1", "Rina");
    let mut modes = ModeController::new();
    assert_eq!(modes.mode(), Mode::Navigate);

    assert_eq!(modes.toggle_arrange(&admin, &RolePolicy).unwrap(), Mode::Edit(EditTool::Move));
    assert_eq!(modes.toggle_eraser(&admin, &RolePolicy).unwrap(), Mode::Edit(EditTool::Erase));
    assert_eq!(modes.toggle_eraser(&admin, &RolePolicy).unwrap(), Mode::Edit(EditTool::Move));
    assert_eq!(modes.toggle_eraser(&admin, &RolePolicy).unwrap(), Mode::Edit(EditTool::Erase));
    assert_eq!(modes.done_editing(), Mode::Navigate);
}

#[test]
fn arrange_from_erase_returns_to_navigate() {
    let admin = Actor::admin("a1", "Rina");
    let mut modes = ModeController::new();
    modes.toggle_arrange(&admin, &RolePolicy).unwrap();
    modes.toggle_eraser(&admin, &RolePolicy).unwrap();

    assert_eq!(modes.toggle_arrange(&admin, &RolePolicy).unwrap(), Mode::Navigate);
}

#[test]
fn eraser_needs_edit_mode() {
    let admin = Actor::admin("a1", "Rina");
    let mut modes = ModeController::new();

    let err = modes.toggle_eraser(&admin, &RolePolicy).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidMode(_)));
    assert_eq!(modes.mode(), Mode::Navigate);
}

#[test]
fn customer_stays_in_navigate() {
    let customer = Actor::customer("u2", "Budi");
    let mut modes = ModeController::new();

    assert!(modes.toggle_arrange(&customer, &RolePolicy).is_err());
    assert!(modes.toggle_eraser(&customer, &RolePolicy).is_err());
    assert_eq!(modes.done_editing(), Mode::Navigate);
    assert_eq!(modes.mode(), Mode::Navigate);
}
