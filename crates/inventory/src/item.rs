use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use flipstock_core::{DomainError, DomainResult, ItemId};

/// Lifecycle status of an inventory item.
///
/// `Available -> Sold` is the only defined transition; a sold item never goes
/// back on the shelf (deletion removes the record instead of changing status).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Available,
    Sold,
}

impl ItemStatus {
    /// Validate a status change. Everything except `Available -> Sold` fails
    /// with [`DomainError::InvalidTransition`], including `Sold -> Sold`.
    pub fn transition_to(self, next: ItemStatus) -> DomainResult<ItemStatus> {
        match (self, next) {
            (ItemStatus::Available, ItemStatus::Sold) => Ok(ItemStatus::Sold),
            (from, to) => Err(DomainError::invalid_transition(format!("{from} -> {to}"))),
        }
    }

    pub fn is_sold(self) -> bool {
        matches!(self, ItemStatus::Sold)
    }

    pub fn is_available(self) -> bool {
        matches!(self, ItemStatus::Available)
    }
}

impl core::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ItemStatus::Available => f.write_str("available"),
            ItemStatus::Sold => f.write_str("sold"),
        }
    }
}

/// An inventory item as held by the remote store.
///
/// `cost` and `price` are optional: the store may hold partial rows, and the
/// aggregation layer treats a missing amount as zero rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Purchase price plus shipping paid in, if recorded.
    #[serde(default)]
    pub cost: Option<Decimal>,
    /// Intended or actual sale price, if recorded.
    #[serde(default)]
    pub price: Option<Decimal>,
    pub status: ItemStatus,
    /// Assigned by the store; default ordering is newest first.
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn is_sold(&self) -> bool {
        self.status.is_sold()
    }

    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }
}

/// Validated input for creating an item.
///
/// Only constructible through [`NewItem::new`], so an empty name or negative
/// amount can never reach the store. The store assigns `id`, `created_at`
/// and the initial `Available` status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    name: String,
    cost: Decimal,
    price: Decimal,
}

impl NewItem {
    pub fn new(
        name: impl Into<String>,
        cost: Decimal,
        price: Decimal,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        if cost.is_sign_negative() {
            return Err(DomainError::validation("cost cannot be negative"));
        }
        if price.is_sign_negative() {
            return Err(DomainError::validation("price cannot be negative"));
        }
        Ok(Self { name, cost, price })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> Decimal {
        self.cost
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

/// Partial update for an item; unset fields are left untouched.
///
/// Serializes with `None` fields omitted, so it doubles as the PATCH body for
/// the REST gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
}

impl ItemPatch {
    /// Patch that marks an item sold.
    pub fn sold() -> Self {
        Self {
            status: Some(ItemStatus::Sold),
            ..Self::default()
        }
    }

    pub fn with_price(price: Decimal) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Apply the patch to an item, enforcing the status transition rule.
    pub fn apply_to(&self, item: &Item) -> DomainResult<Item> {
        let status = match self.status {
            Some(next) => item.status.transition_to(next)?,
            None => item.status,
        };
        Ok(Item {
            id: item.id,
            name: self.name.clone().unwrap_or_else(|| item.name.clone()),
            cost: self.cost.or(item.cost),
            price: self.price.or(item.price),
            status,
            created_at: item.created_at,
        })
    }
}
