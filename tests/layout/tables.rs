//! Integration tests for table state
//!
//! Tests status and capacity edits and that only tables carry them.

use marketfloor_foundation::{ErrorKind, ItemType, StallId, TableStatus};
use marketfloor_layout::{LayoutConfig, LayoutStore};
use std::num::NonZeroU32;

#[test]
fn new_table_is_available_with_four_seats() {
    let mut store = LayoutStore::new();
    let id = store.add_item(ItemType::Table);
    let table = store.get(id).unwrap();

    assert_eq!(table.status(), Some(TableStatus::Available));
    assert_eq!(table.capacity(), NonZeroU32::new(4));
}

#[test]
fn configured_capacity_applies_to_new_tables() {
    let config = LayoutConfig::default().with_table_capacity(NonZeroU32::new(6).unwrap());
    let mut store = LayoutStore::with_config(config);
    let id = store.add_item(ItemType::Table);

    assert_eq!(store.get(id).unwrap().capacity(), NonZeroU32::new(6));
}

#[test]
fn non_tables_have_no_status() {
    let mut store = LayoutStore::new();
    for item_type in ItemType::ALL {
        if item_type == ItemType::Table {
            continue;
        }
        let id = store.add_item(item_type);
        assert_eq!(store.get(id).unwrap().status(), None);
        assert_eq!(store.get(id).unwrap().capacity(), None);
    }
}

#[test]
fn set_status_returns_previous() {
    let mut store = LayoutStore::new();
    let id = store.add_item(ItemType::Table);

    assert_eq!(
        store.set_table_status(id, TableStatus::Ordering).unwrap(),
        TableStatus::Available
    );
    assert_eq!(
        store.set_table_status(id, TableStatus::Dirty).unwrap(),
        TableStatus::Ordering
    );
}

#[test]
fn set_status_on_non_table_is_refused() {
    let mut store = LayoutStore::new();
    let tree = store.add_item(ItemType::Tree);
    let before = store.snapshot();

    let err = store.set_table_status(tree, TableStatus::Dirty).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NotATable { .. }));
    assert_eq!(store.snapshot(), before);
}

#[test]
fn set_status_on_missing_item_is_not_found() {
    let mut store = LayoutStore::new();
    let id = store.add_item(ItemType::Table);
    store.remove_item(id);

    let err = store.set_table_status(id, TableStatus::Dirty).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn zero_capacity_is_refused() {
    let mut store = LayoutStore::new();
    let id = store.add_item(ItemType::Table);

    let err = store.set_table_capacity(id, 0).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidCapacity(0));
    assert_eq!(store.get(id).unwrap().capacity(), NonZeroU32::new(4));

    assert_eq!(store.set_table_capacity(id, 8).unwrap(), NonZeroU32::new(4).unwrap());
    assert_eq!(store.get(id).unwrap().capacity(), NonZeroU32::new(8));
}

#[test]
fn only_stalls_link_to_point_of_sale() {
    let mut store = LayoutStore::new();
    let stall = store.add_item(ItemType::Stall);
    let table = store.add_item(ItemType::Table);

    assert_eq!(store.link_stall(stall, Some(StallId(9))).unwrap(), None);
    assert_eq!(store.get(stall).unwrap().linked_stall(), Some(StallId(9)));

    let err = store.link_stall(table, Some(StallId(9))).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NotAStall { .. }));
}

#[test]
fn relabel_returns_old_label() {
    let mut store = LayoutStore::new();
    let id = store.add_item(ItemType::Table);

    assert_eq!(store.set_label(id, "Window seat"), Some("Table".to_string()));
    assert_eq!(store.get(id).unwrap().label(), "Window seat");
}
