use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A standalone cost not tied to a specific item, supplied by the caller.
///
/// Categoryless expenses still count toward the expense total; they are only
/// excluded from the per-category breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(default)]
    pub category: Option<String>,
    pub amount: Decimal,
}

impl Expense {
    pub fn new(category: Option<&str>, amount: Decimal) -> Self {
        Self {
            category: category.map(str::to_string),
            amount,
        }
    }
}
