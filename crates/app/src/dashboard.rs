use flipstock_core::ItemId;
use flipstock_inventory::{ItemPatch, ItemStatus, NewItem, Snapshot};
use flipstock_metrics::{dashboard_metrics, DashboardMetrics};
use flipstock_store::ItemStore;

/// Dashboard view state over an item store.
///
/// Holds the last fetched snapshot and the metrics derived from it. Callers
/// drive recomputation explicitly via [`refresh`](Self::refresh); nothing is
/// recomputed behind the caller's back.
#[derive(Debug)]
pub struct DashboardView<S> {
    store: S,
    snapshot: Snapshot,
    metrics: DashboardMetrics,
    error: Option<String>,
}

impl<S: ItemStore> DashboardView<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            snapshot: Snapshot::default(),
            metrics: DashboardMetrics::default(),
            error: None,
        }
    }

    /// Pull a fresh snapshot and recompute metrics.
    ///
    /// On failure the previous snapshot and metrics are kept and a single
    /// user-visible error message is recorded.
    pub async fn refresh(&mut self) {
        match self.store.list_all().await {
            Ok(items) => {
                self.snapshot = Snapshot::from(items);
                self.metrics = dashboard_metrics(self.snapshot.items());
                self.error = None;
            }
            Err(err) => self.fail("Failed to load dashboard data", err),
        }
    }

    /// Create an item, then re-fetch.
    pub async fn add_item(&mut self, new_item: NewItem) {
        match self.store.create(new_item).await {
            Ok(item) => {
                tracing::info!(id = %item.id, "item added");
                self.refresh().await;
            }
            Err(err) => self.fail("Failed to add item to inventory", err),
        }
    }

    /// Mark an item sold, then re-fetch.
    ///
    /// The transition is validated against the current snapshot before any
    /// remote call, so a sold item can never be re-sold or revived.
    pub async fn sell_item(&mut self, id: ItemId) {
        let Some(item) = self.snapshot.get(id) else {
            self.fail("Failed to update item status", flipstock_store::StoreError::NotFound);
            return;
        };
        if let Err(err) = item.status.transition_to(ItemStatus::Sold) {
            self.fail("Failed to update item status", err);
            return;
        }
        match self.store.update(id, ItemPatch::sold()).await {
            Ok(item) => {
                tracing::info!(id = %item.id, "item marked sold");
                self.refresh().await;
            }
            Err(err) => self.fail("Failed to update item status", err),
        }
    }

    /// Delete an item, then re-fetch.
    pub async fn delete_item(&mut self, id: ItemId) {
        match self.store.delete(id).await {
            Ok(()) => {
                tracing::info!(%id, "item deleted");
                self.refresh().await;
            }
            Err(err) => self.fail("Failed to delete item", err),
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn metrics(&self) -> &DashboardMetrics {
        &self.metrics
    }

    /// The single user-visible error message, if the last operation failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn fail(&mut self, message: &str, err: impl core::fmt::Display) {
        tracing::warn!(error = %err, "{message}");
        self.error = Some(message.to_string());
    }
}
