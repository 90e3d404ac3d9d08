//! Store Module
//!
//! The operation-level API the presentation layer calls: one
//! [`InventoryStore`] per category, each operation acquiring and
//! releasing its own connection.

pub mod inventory;

// Re-exports
pub use inventory::InventoryStore;
