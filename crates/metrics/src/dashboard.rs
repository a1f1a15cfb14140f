use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use flipstock_inventory::{Item, ItemStatus};

/// Headline figures for the dashboard view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Summed price over sold items.
    pub total_revenue: Decimal,
    /// Summed `price - cost` over sold items. May be negative.
    pub total_profit: Decimal,
    pub items_sold: usize,
    pub items_in_stock: usize,
}

/// Reduce a snapshot to dashboard metrics.
///
/// Items partition by status (exhaustive and disjoint); a missing cost or
/// price counts as zero. Empty input yields the all-zero result.
pub fn dashboard_metrics(items: &[Item]) -> DashboardMetrics {
    let mut metrics = DashboardMetrics::default();
    for item in items {
        match item.status {
            ItemStatus::Sold => {
                let price = item.price.unwrap_or_default();
                let cost = item.cost.unwrap_or_default();
                metrics.total_revenue += price;
                metrics.total_profit += price - cost;
                metrics.items_sold += 1;
            }
            ItemStatus::Available => {
                metrics.items_in_stock += 1;
            }
        }
    }
    metrics
}
