//! Database Models
//!
//! The category selector and the record row type.

use serde::{Deserialize, Serialize};

use super::schema::{TableSchema, ELECTRONICS, MECHANICS};

/// Inventory category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electronics,
    Mechanics,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Mechanics => "mechanics",
        }
    }

    /// Parse a category name as the UI's table selector supplies it
    /// ("ELECTRONICS" / "MECHANICS", any case).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "electronics" => Some(Self::Electronics),
            "mechanics" => Some(Self::Mechanics),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Mechanics => "Mechanics",
        }
    }

    /// Table layout backing this category.
    pub fn schema(&self) -> &'static TableSchema {
        match self {
            Self::Electronics => &ELECTRONICS,
            Self::Mechanics => &MECHANICS,
        }
    }

    /// Export file name used when the caller does not pick one.
    pub fn default_export_name(&self) -> &'static str {
        match self {
            Self::Electronics => "electronics_inventory.csv",
            Self::Mechanics => "mechanics_inventory.csv",
        }
    }
}

/// One inventory row: the store-assigned rowid plus the text fields in
/// schema column order. All fields are opaque text, including the
/// numeric-looking ones (Value, Amount).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: i64,
    pub fields: Vec<String>,
}

impl Record {
    /// Look up a field by column name within the given schema.
    pub fn field(&self, schema: &TableSchema, column: &str) -> Option<&str> {
        let idx = schema.columns.iter().position(|c| *c == column)?;
        self.fields.get(idx).map(String::as_str)
    }
}
