//! View-state layer: the state-synchronization contract between the item
//! store gateway and the metrics aggregator.
//!
//! Each view holds one snapshot and its derived metrics. State changes follow
//! a single pattern: mutate through the gateway, then sequentially re-fetch a
//! fresh snapshot and recompute. Aggregates are never updated incrementally
//! and gateway calls are never overlapped. A failed operation records one
//! user-visible error message, which the caller can dismiss; there is no
//! automatic retry.

pub mod dashboard;
pub mod tax;

pub use dashboard::DashboardView;
pub use tax::TaxReportView;
