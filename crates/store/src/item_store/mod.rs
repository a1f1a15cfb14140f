//! Item store boundary.
//!
//! This module defines the gateway abstraction for the single `items`
//! collection without making any storage assumptions, plus the REST-backed
//! production implementation and an in-memory one for tests/dev.

pub mod in_memory;
pub mod rest;
pub mod r#trait;

pub use in_memory::InMemoryItemStore;
pub use rest::RestItemStore;
pub use r#trait::ItemStore;
