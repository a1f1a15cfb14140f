use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use flipstock_core::ItemId;

/// A completed transaction event, supplied by the caller.
///
/// A `Sale` is tracked independently of the item's `Sold` status flag; the
/// optional `item_id` back-reference is informational only and nothing
/// reconciles the two. `fees` and `shipping_paid` default to zero in
/// aggregation when missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub date: DateTime<Utc>,
    pub sale_price: Decimal,
    pub profit: Decimal,
    #[serde(default)]
    pub fees: Option<Decimal>,
    #[serde(default)]
    pub shipping_paid: Option<Decimal>,
    #[serde(default)]
    pub item_id: Option<ItemId>,
}
