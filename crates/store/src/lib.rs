//! Item store gateway.
//!
//! The sole source of truth for inventory items is a remote relational store;
//! this crate is the boundary object mediating all reads and writes to it.
//! Consumers hold only transient snapshots and re-fetch after every mutation.

pub mod config;
pub mod error;
pub mod item_store;

pub use config::StoreConfig;
pub use error::StoreError;
pub use item_store::{InMemoryItemStore, ItemStore, RestItemStore};
