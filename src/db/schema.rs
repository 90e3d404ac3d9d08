//! Database Schema
//!
//! Fixed column layouts for the two category tables.

use rusqlite::Connection;

use super::DbResult;

/// Ordered column layout of one category table.
///
/// The rowid is the record's identifier and is not part of the declared
/// columns; it is selected explicitly where needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    /// SQL table name
    pub table: &'static str,
    /// Column names in declaration order
    pub columns: &'static [&'static str],
}

/// Electronics inventory table
pub const ELECTRONICS: TableSchema = TableSchema {
    table: "electronics",
    columns: &[
        "Description",
        "PartNo",
        "Category",
        "Package",
        "Value",
        "Unit",
        "Cabinet",
        "Amount",
        "Notes",
    ],
};

/// Mechanics inventory table
pub const MECHANICS: TableSchema = TableSchema {
    table: "mechanics",
    columns: &["Description", "PartNo", "Category", "Cabinet", "Amount", "Notes"],
};

impl TableSchema {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// `"Description", "PartNo", ...` for SELECT and INSERT column lists.
    pub(crate) fn column_list(&self) -> String {
        self.columns
            .iter()
            .map(|c| format!("\"{}\"", c))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn create_sql(&self) -> String {
        let defs = self
            .columns
            .iter()
            .map(|c| format!("\"{}\" TEXT", c))
            .collect::<Vec<_>>()
            .join(", ");
        format!("CREATE TABLE IF NOT EXISTS {} ({});", self.table, defs)
    }
}

/// Initialize the database schema.
///
/// Idempotent: creates each category table if absent, never drops or
/// alters an existing one. Safe to run on every program start.
pub fn init_schema(conn: &Connection) -> DbResult<()> {
    let mut batch = String::new();
    for schema in [&ELECTRONICS, &MECHANICS] {
        batch.push_str(&schema.create_sql());
        batch.push('\n');
    }
    conn.execute_batch(&batch)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_schema() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"electronics".to_string()));
        assert!(tables.contains(&"mechanics".to_string()));
    }

    #[test]
    fn test_init_schema_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        conn.execute(
            "INSERT INTO electronics VALUES ('r', 'R-1', 'Resistors', '0805', '10', 'k', 'A1', '5', '')",
            [],
        )
        .unwrap();

        // A second run must not drop or recreate the table
        init_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM electronics", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_column_order() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let stmt = conn.prepare("SELECT * FROM mechanics").unwrap();
        let names: Vec<&str> = stmt.column_names();
        assert_eq!(names, MECHANICS.columns);
    }
}
