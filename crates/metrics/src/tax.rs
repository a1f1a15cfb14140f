use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use flipstock_inventory::{Expense, Item, Sale};

/// Per-category expense total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
}

/// Tax-report figures derived from one snapshot plus caller-supplied sale and
/// expense lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxReportData {
    /// Summed price over sold items.
    pub gross_receipts: Decimal,
    /// Cost of goods sold: summed cost over sold items.
    pub cogs: Decimal,
    pub platform_fees: Decimal,
    pub shipping_costs: Decimal,
    /// Per-category sums in first-seen order, so report text is reproducible.
    /// Categoryless expenses are excluded here but included in the total.
    pub expenses_by_category: Vec<CategoryTotal>,
    pub total_expenses: Decimal,
    /// `gross_receipts - cogs - platform_fees - shipping_costs -
    /// total_expenses`. May be negative.
    pub net_profit: Decimal,
}

impl TaxReportData {
    pub fn category_amount(&self, category: &str) -> Option<Decimal> {
        self.expenses_by_category
            .iter()
            .find(|total| total.category == category)
            .map(|total| total.amount)
    }
}

/// Derive tax figures. Missing fees/shipping/cost/price count as zero.
pub fn tax_report(items: &[Item], sales: &[Sale], expenses: &[Expense]) -> TaxReportData {
    let mut gross_receipts = Decimal::ZERO;
    let mut cogs = Decimal::ZERO;
    for item in items.iter().filter(|item| item.is_sold()) {
        gross_receipts += item.price.unwrap_or_default();
        cogs += item.cost.unwrap_or_default();
    }

    let mut platform_fees = Decimal::ZERO;
    let mut shipping_costs = Decimal::ZERO;
    for sale in sales {
        platform_fees += sale.fees.unwrap_or_default();
        shipping_costs += sale.shipping_paid.unwrap_or_default();
    }

    let mut expenses_by_category: Vec<CategoryTotal> = Vec::new();
    let mut category_index: HashMap<&str, usize> = HashMap::new();
    let mut total_expenses = Decimal::ZERO;
    for expense in expenses {
        total_expenses += expense.amount;
        let Some(category) = expense.category.as_deref() else {
            continue;
        };
        match category_index.get(category) {
            Some(&slot) => expenses_by_category[slot].amount += expense.amount,
            None => {
                category_index.insert(category, expenses_by_category.len());
                expenses_by_category.push(CategoryTotal {
                    category: category.to_string(),
                    amount: expense.amount,
                });
            }
        }
    }

    let net_profit =
        gross_receipts - cogs - platform_fees - shipping_costs - total_expenses;

    TaxReportData {
        gross_receipts,
        cogs,
        platform_fees,
        shipping_costs,
        expenses_by_category,
        total_expenses,
        net_profit,
    }
}
