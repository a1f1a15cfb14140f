use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use flipstock_core::ItemId;
use flipstock_inventory::{Item, ItemPatch, ItemStatus, NewItem};

use super::r#trait::ItemStore;
use crate::error::StoreError;

/// In-memory item store.
///
/// Intended for tests/dev. Rows are kept in insertion order, which matches
/// `created_at` order and stays deterministic when timestamps collide.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    rows: Mutex<Vec<Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        let rows = self.rows.lock().expect("item store lock poisoned");
        Ok(rows.iter().rev().cloned().collect())
    }

    async fn create(&self, new_item: NewItem) -> Result<Item, StoreError> {
        let item = Item {
            id: ItemId::new(),
            name: new_item.name().to_string(),
            cost: Some(new_item.cost()),
            price: Some(new_item.price()),
            status: ItemStatus::Available,
            created_at: Utc::now(),
        };
        let mut rows = self.rows.lock().expect("item store lock poisoned");
        rows.push(item.clone());
        Ok(item)
    }

    async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<Item, StoreError> {
        let mut rows = self.rows.lock().expect("item store lock poisoned");
        let row = rows
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound)?;
        let updated = patch.apply_to(row)?;
        *row = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().expect("item store lock poisoned");
        let position = rows
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::NotFound)?;
        rows.remove(position);
        Ok(())
    }

    async fn list_by_status(&self, status: ItemStatus) -> Result<Vec<Item>, StoreError> {
        let rows = self.rows.lock().expect("item store lock poisoned");
        Ok(rows
            .iter()
            .rev()
            .filter(|item| item.status == status)
            .cloned()
            .collect())
    }
}
