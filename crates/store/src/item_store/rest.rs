use reqwest::{Client, RequestBuilder, Response};
use rust_decimal::Decimal;
use serde::Serialize;

use flipstock_core::ItemId;
use flipstock_inventory::{Item, ItemPatch, ItemStatus, NewItem};

use super::r#trait::ItemStore;
use crate::config::StoreConfig;
use crate::error::StoreError;

/// Thin REST client over the remote `items` table (PostgREST dialect).
///
/// Operations map 1:1 onto single-row insert/update/delete keyed by `id`;
/// reads request descending `created_at` order. Writes ask for
/// `return=representation` so an empty match can be reported as `NotFound`.
pub struct RestItemStore {
    client: Client,
    config: StoreConfig,
}

/// Insert body for `create`; the store fills in `id` and `created_at`.
#[derive(Debug, Serialize)]
struct InsertRow<'a> {
    name: &'a str,
    cost: Decimal,
    price: Decimal,
    status: ItemStatus,
}

impl RestItemStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(StoreConfig::from_env())
    }

    fn items_url(&self) -> String {
        format!(
            "{}/rest/v1/items",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    async fn fetch(&self, id: ItemId) -> Result<Item, StoreError> {
        let response = self
            .authed(self.client.get(self.items_url()))
            .query(&[("select", "*".to_string()), ("id", format!("eq.{id}"))])
            .send()
            .await?;
        Self::rows(response)
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::NotFound)
    }

    async fn rows(response: Response) -> Result<Vec<Item>, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "item store rejected request");
            return Err(StoreError::Backend {
                status: status.as_u16(),
                message,
            });
        }
        response
            .json::<Vec<Item>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl ItemStore for RestItemStore {
    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        tracing::debug!("listing all items");
        let response = self
            .authed(self.client.get(self.items_url()))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;
        Self::rows(response).await
    }

    async fn create(&self, new_item: NewItem) -> Result<Item, StoreError> {
        tracing::debug!(name = new_item.name(), "creating item");
        let row = InsertRow {
            name: new_item.name(),
            cost: new_item.cost(),
            price: new_item.price(),
            status: ItemStatus::Available,
        };
        let response = self
            .authed(self.client.post(self.items_url()))
            .header("Prefer", "return=representation")
            .json(&[row])
            .send()
            .await?;
        Self::rows(response)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Decode("create returned no representation".to_string()))
    }

    async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<Item, StoreError> {
        tracing::debug!(%id, "updating item");
        if patch.is_empty() {
            return self.fetch(id).await;
        }
        // The remote store does not know the transition rule; validate a
        // status change against the current row before writing anything.
        if patch.status.is_some() {
            let current = self.fetch(id).await?;
            patch.apply_to(&current)?;
        }
        let response = self
            .authed(self.client.patch(self.items_url()))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(&patch)
            .send()
            .await?;
        // PostgREST reports an update that matched nothing as an empty row set.
        Self::rows(response)
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        tracing::debug!(%id, "deleting item");
        let response = self
            .authed(self.client.delete(self.items_url()))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .send()
            .await?;
        let deleted = Self::rows(response).await?;
        if deleted.is_empty() {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_by_status(&self, status: ItemStatus) -> Result<Vec<Item>, StoreError> {
        tracing::debug!(%status, "listing items by status");
        let response = self
            .authed(self.client.get(self.items_url()))
            .query(&[
                ("select", "*".to_string()),
                ("status", format!("eq.{status}")),
                ("order", "created_at.desc".to_string()),
            ])
            .send()
            .await?;
        Self::rows(response).await
    }
}
