//! Database Module
//!
//! SQLite database layer: fixed table schemas, connection handling, and
//! parameterized CRUD queries shared by both inventory categories.

pub mod connection;
pub mod export;
pub mod models;
pub mod queries;
pub mod schema;

use thiserror::Error;

/// Database errors
#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("invalid record id: {0:?}")]
    InvalidId(String),

    #[error("got {got} values for a table with {expected} columns")]
    ColumnCount { expected: usize, got: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DbResult<T> = Result<T, DbError>;

// Re-exports
pub use connection::{Database, DatabaseConfig};
pub use models::{Category, Record};
pub use queries::*;
pub use schema::{TableSchema, ELECTRONICS, MECHANICS};
