//! Labstock - Lab Inventory Store
//!
//! A local-first SQLite store for hardware-lab inventory, with two
//! independent category tables (electronics and mechanics) behind one
//! generic, schema-driven data-access layer.
//!
//! This crate is the data-access contract only: a UI on top of it supplies
//! field values as strings, selects the active category, and renders the
//! returned rows. Every operation opens its own connection to the store,
//! runs one statement, and releases the connection before returning.

pub mod db;
pub mod store;

pub use db::{
    Category, Database, DatabaseConfig, DbError, DbResult, Record, TableSchema, ELECTRONICS,
    MECHANICS,
};
pub use store::InventoryStore;
