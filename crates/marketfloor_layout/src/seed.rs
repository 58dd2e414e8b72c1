//! The fixed initial market plan a session starts from.

use marketfloor_foundation::{ItemType, Position, StallId};

/// One entry of a seed plan. Ids are assigned by the store on load.
#[derive(Clone, Debug, PartialEq)]
pub struct SeedItem {
    /// Type of the item.
    pub item_type: ItemType,
    /// Label override; the type name is used when `None`.
    pub label: Option<String>,
    /// Initial position.
    pub position: Position,
    /// Point-of-sale link, honoured for stalls only.
    pub linked_stall: Option<StallId>,
}

impl SeedItem {
    /// Creates a seed entry with the default label.
    #[must_use]
    pub fn new(item_type: ItemType, x: f64, y: f64) -> Self {
        Self {
            item_type,
            label: None,
            position: Position::new(x, y),
            linked_stall: None,
        }
    }

    /// Builder method to set the label.
    #[must_use]
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builder method to link a stall to its point-of-sale record.
    #[must_use]
    pub fn linked_to(mut self, stall: StallId) -> Self {
        self.linked_stall = Some(stall);
        self
    }
}

/// The default market plan: three linked stalls along a street, four tables
/// in the dining area, a stage and the usual fixtures.
#[must_use]
pub fn default_market() -> Vec<SeedItem> {
    vec![
        SeedItem::new(ItemType::Entrance, 50.0, 95.0).labelled("Main Gate"),
        SeedItem::new(ItemType::Street, 50.0, 80.0).labelled("Market Walk"),
        SeedItem::new(ItemType::Stall, 15.0, 20.0)
            .labelled("Warung Sate")
            .linked_to(StallId(1)),
        SeedItem::new(ItemType::Stall, 35.0, 20.0)
            .labelled("Es Kelapa")
            .linked_to(StallId(2)),
        SeedItem::new(ItemType::Stall, 55.0, 20.0)
            .labelled("Bakso Corner")
            .linked_to(StallId(3)),
        SeedItem::new(ItemType::Table, 25.0, 50.0).labelled("T1"),
        SeedItem::new(ItemType::Table, 40.0, 50.0).labelled("T2"),
        SeedItem::new(ItemType::Table, 25.0, 65.0).labelled("T3"),
        SeedItem::new(ItemType::Table, 40.0, 65.0).labelled("T4"),
        SeedItem::new(ItemType::Stage, 80.0, 30.0),
        SeedItem::new(ItemType::Toilet, 90.0, 85.0),
        SeedItem::new(ItemType::Tree, 5.0, 60.0),
        SeedItem::new(ItemType::Tree, 70.0, 60.0),
        SeedItem::new(ItemType::Pole, 60.0, 75.0),
        SeedItem::new(ItemType::Office, 85.0, 60.0).labelled("Market Office"),
    ]
}
