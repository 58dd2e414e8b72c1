//! Integration tests for item lifecycle
//!
//! Tests adding, moving and removing items and the position invariants.

use marketfloor_foundation::{ItemType, Position};
use marketfloor_layout::{LayoutConfig, LayoutStore};
use proptest::prelude::*;

// =============================================================================
// Adding Items
// =============================================================================

#[test]
fn every_type_gets_a_unique_id() {
    let mut store = LayoutStore::new();
    let ids: Vec<_> = ItemType::ALL
        .iter()
        .map(|&item_type| store.add_item(item_type))
        .collect();

    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(store.len(), ItemType::ALL.len());
}

#[test]
fn new_items_spawn_at_center_with_type_label() {
    let mut store = LayoutStore::new();
    let id = store.add_item(ItemType::Toilet);
    let item = store.get(id).unwrap();

    assert_eq!(item.position(), Position::center());
    assert_eq!(item.label(), "Toilet");
    assert_eq!(item.size(), None);
}

#[test]
fn street_gets_default_footprint() {
    let mut store = LayoutStore::new();
    let id = store.add_item(ItemType::Street);
    let size = store.get(id).unwrap().size().unwrap();

    assert!((size.width() - 20.0).abs() < f64::EPSILON);
    assert!((size.height() - 5.0).abs() < f64::EPSILON);
}

#[test]
fn configured_spawn_position_is_used() {
    let config = LayoutConfig::default().with_spawn_position(Position::new(10.0, 90.0));
    let mut store = LayoutStore::with_config(config);
    let id = store.add_item(ItemType::Tree);

    assert_eq!(store.get(id).unwrap().position(), Position::new(10.0, 90.0));
}

#[test]
fn iteration_follows_insertion_order() {
    let mut store = LayoutStore::new();
    let a = store.add_item(ItemType::Pole);
    let b = store.add_item(ItemType::Stage);
    let c = store.add_item(ItemType::Pole);

    assert_eq!(store.ids().collect::<Vec<_>>(), vec![a, b, c]);
}

// =============================================================================
// Moving Items
// =============================================================================

#[test]
fn move_clamps_into_plan() {
    let mut store = LayoutStore::new();
    let id = store.add_item(ItemType::House);

    assert_eq!(store.move_item(id, 150.0, -20.0), Some(Position::new(100.0, 0.0)));
    assert_eq!(store.get(id).unwrap().position(), Position::new(100.0, 0.0));
}

#[test]
fn move_nan_lands_on_zero() {
    let mut store = LayoutStore::new();
    let id = store.add_item(ItemType::House);

    store.move_item(id, f64::NAN, 40.0);
    assert_eq!(store.get(id).unwrap().position(), Position::new(0.0, 40.0));
}

#[test]
fn move_missing_item_is_noop() {
    let mut store = LayoutStore::new();
    let id = store.add_item(ItemType::Tree);
    store.remove_item(id);

    assert_eq!(store.move_item(id, 10.0, 10.0), None);
    assert!(store.is_empty());
}

// =============================================================================
// Removing Items
// =============================================================================

#[test]
fn remove_twice_is_idempotent() {
    let mut store = LayoutStore::new();
    let keep = store.add_item(ItemType::Stage);
    let gone = store.add_item(ItemType::Tree);

    assert!(store.remove_item(gone).is_some());
    let after_first = store.snapshot();
    assert!(store.remove_item(gone).is_none());

    assert_eq!(store.snapshot(), after_first);
    assert!(store.contains(keep));
}

#[test]
fn removed_ids_are_not_reused() {
    let mut store = LayoutStore::new();
    let first = store.add_item(ItemType::Tree);
    store.remove_item(first);
    let second = store.add_item(ItemType::Tree);

    assert_ne!(first, second);
}

#[test]
fn snapshot_is_unaffected_by_later_edits() {
    let mut store = LayoutStore::new();
    let id = store.add_item(ItemType::Pole);
    let before = store.snapshot();

    store.move_item(id, 1.0, 1.0);
    store.add_item(ItemType::Tree);

    assert_eq!(before.len(), 1);
    assert_eq!(before.get(id).unwrap().position(), Position::center());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn stored_positions_stay_in_bounds(
        moves in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 1..20)
    ) {
        let mut store = LayoutStore::new();
        let id = store.add_item(ItemType::Table);

        for (x, y) in moves {
            let pos = store.move_item(id, x, y).unwrap();
            prop_assert!((0.0..=100.0).contains(&pos.x()));
            prop_assert!((0.0..=100.0).contains(&pos.y()));
        }
    }

    #[test]
    fn clamping_is_idempotent(x in -1e6f64..1e6, y in -1e6f64..1e6) {
        let mut store = LayoutStore::new();
        let id = store.add_item(ItemType::Tree);

        let once = store.move_item(id, x, y).unwrap();
        let twice = store.move_item(id, once.x(), once.y()).unwrap();
        prop_assert_eq!(once, twice);
    }
}
