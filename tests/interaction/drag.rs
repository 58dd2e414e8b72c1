//! Integration tests for the drag machine

use marketfloor_foundation::{ErrorKind, ItemType, Position, Role};
use marketfloor_interaction::{Container, DragState, EditTool, Mode};
use marketfloor_layout::LayoutStore;

const MOVE: Mode = Mode::Edit(EditTool::Move);

#[test]
fn drag_out_of_bounds_clamps() {
    let mut store = LayoutStore::new();
    let id = store.add_item_at(ItemType::Table, 10.0, 10.0);
    let mut drag = DragState::new();

    drag.begin_drag(&store, id, MOVE, Role::Admin).unwrap();
    assert_eq!(drag.update_drag(&mut store, 150.0, 150.0), Some(Position::new(100.0, 100.0)));
    assert_eq!(drag.end_drag(), Some(id));

    assert_eq!(store.get(id).unwrap().position(), Position::new(100.0, 100.0));
}

#[test]
fn pixels_map_through_container() {
    let container = Container::new(1000.0, 500.0);
    let mut store = LayoutStore::new();
    let id = store.add_item(ItemType::Stage);
    let mut drag = DragState::new();

    drag.begin_drag(&store, id, MOVE, Role::Admin).unwrap();
    let (x, y) = container.to_percent(250.0, 400.0);
    assert_eq!(drag.update_drag(&mut store, x, y), Some(Position::new(25.0, 80.0)));
}

#[test]
fn only_one_item_drags_at_a_time() {
    let mut store = LayoutStore::new();
    let a = store.add_item(ItemType::Tree);
    let b = store.add_item(ItemType::Tree);
    let mut drag = DragState::new();

    drag.begin_drag(&store, a, MOVE, Role::Admin).unwrap();
    let err = drag.begin_drag(&store, b, MOVE, Role::Admin).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidMode(_)));
    assert_eq!(drag.dragging(), Some(a));
}

#[test]
fn no_drag_outside_move_tool() {
    let mut store = LayoutStore::new();
    let id = store.add_item(ItemType::Tree);
    let mut drag = DragState::new();

    for mode in [Mode::Navigate, Mode::Edit(EditTool::Erase)] {
        assert!(drag.begin_drag(&store, id, mode, Role::Admin).is_err());
    }
    let err = drag.begin_drag(&store, id, MOVE, Role::Customer).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::PermissionDenied(_)));
    assert!(!drag.is_dragging());
}

#[test]
fn moves_while_idle_change_nothing() {
    let mut store = LayoutStore::new();
    let id = store.add_item(ItemType::Tree);
    let mut drag = DragState::new();

    assert_eq!(drag.update_drag(&mut store, 5.0, 5.0), None);
    assert_eq!(store.get(id).unwrap().position(), Position::center());
}

#[test]
fn removed_item_ends_drag() {
    let mut store = LayoutStore::new();
    let id = store.add_item(ItemType::Tree);
    let mut drag = DragState::new();

    drag.begin_drag(&store, id, MOVE, Role::Admin).unwrap();
    store.remove_item(id);

    assert_eq!(drag.update_drag(&mut store, 5.0, 5.0), None);
    assert!(!drag.is_dragging());
}
