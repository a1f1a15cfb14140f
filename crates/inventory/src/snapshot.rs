use serde::{Deserialize, Serialize};

use flipstock_core::ItemId;

use crate::item::Item;

/// Immutable point-in-time copy of the item collection.
///
/// One snapshot feeds one aggregation call; mutations go through the store
/// gateway and are followed by a fresh fetch, never by editing a snapshot in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot(Vec<Item>);

impl Snapshot {
    pub fn new(items: Vec<Item>) -> Self {
        Self(items)
    }

    pub fn items(&self) -> &[Item] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.0.iter().find(|item| item.id == id)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Item> {
        self.0.iter()
    }
}

impl From<Vec<Item>> for Snapshot {
    fn from(items: Vec<Item>) -> Self {
        Self(items)
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Item;
    type IntoIter = core::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
