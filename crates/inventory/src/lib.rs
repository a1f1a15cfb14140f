//! Inventory domain types.
//!
//! This crate contains the records the tracker is built around, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod expense;
pub mod item;
pub mod sale;
pub mod snapshot;

pub use expense::Expense;
pub use item::{Item, ItemPatch, ItemStatus, NewItem};
pub use sale::Sale;
pub use snapshot::Snapshot;
