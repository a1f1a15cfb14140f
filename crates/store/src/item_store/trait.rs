use std::sync::Arc;

use async_trait::async_trait;

use flipstock_core::ItemId;
use flipstock_inventory::{Item, ItemPatch, ItemStatus, NewItem};

use crate::error::StoreError;

/// CRUD gateway over the single `items` collection.
///
/// Every operation is a remote call and may fail independently of input
/// validity. Only the reads are idempotent at the protocol level. There is no
/// retry policy: a failed call surfaces directly to the caller.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items, newest `created_at` first.
    async fn list_all(&self) -> Result<Vec<Item>, StoreError>;

    /// Create an item with `Available` status; the store assigns `id` and
    /// `created_at`.
    async fn create(&self, new_item: NewItem) -> Result<Item, StoreError>;

    /// Apply a partial update. Fails with [`StoreError::NotFound`] if the id
    /// does not exist. A status change is checked against the transition rule
    /// before anything is written; a disallowed change fails with
    /// [`StoreError::Domain`].
    async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<Item, StoreError>;

    /// Remove an item. Fails with [`StoreError::NotFound`] if the id does not
    /// exist.
    async fn delete(&self, id: ItemId) -> Result<(), StoreError>;

    /// Items with the given status, filtered server-side, newest first.
    async fn list_by_status(&self, status: ItemStatus) -> Result<Vec<Item>, StoreError>;
}

#[async_trait]
impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        (**self).list_all().await
    }

    async fn create(&self, new_item: NewItem) -> Result<Item, StoreError> {
        (**self).create(new_item).await
    }

    async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<Item, StoreError> {
        (**self).update(id, patch).await
    }

    async fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        (**self).delete(id).await
    }

    async fn list_by_status(&self, status: ItemStatus) -> Result<Vec<Item>, StoreError> {
        (**self).list_by_status(status).await
    }
}
