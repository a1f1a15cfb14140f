//! Metrics aggregation over item snapshots.
//!
//! Pure and stateless: every function takes a snapshot (plus caller-supplied
//! sale/expense lists for tax figures) and returns derived numbers with no IO
//! and no state across calls. Missing monetary fields count as zero by
//! contract; the aggregator never fails for well-formed input.

pub mod dashboard;
pub mod tax;

pub use dashboard::{dashboard_metrics, DashboardMetrics};
pub use tax::{tax_report, CategoryTotal, TaxReportData};
