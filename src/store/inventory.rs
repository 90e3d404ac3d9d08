//! Inventory Store
//!
//! Category-bound handle implementing the full operation set. Each call
//! opens a fresh connection, runs exactly one statement (or one batched
//! statement for bulk insert), and releases the connection on return —
//! no connection reuse, no transaction spanning operations.

use std::path::Path;

use log::debug;

use crate::db::{self, Category, Database, DatabaseConfig, DbResult, Record, TableSchema};

/// One category's view of the inventory database.
///
/// Both stores may point at the same database file; the two tables are
/// fully independent. Execution is single-threaded and blocking: the
/// caller invokes one operation at a time and renders the result before
/// the next.
pub struct InventoryStore {
    db: Database,
    category: Category,
}

impl InventoryStore {
    /// Open the store for one category.
    ///
    /// Ensures the database file and both category tables exist; an
    /// unwritable store is fatal here, before any operation runs.
    pub fn open(config: DatabaseConfig, category: Category) -> DbResult<Self> {
        let db = Database::open(config)?;
        Ok(Self { db, category })
    }

    /// Open with the default database path
    pub fn open_default(category: Category) -> DbResult<Self> {
        Self::open(DatabaseConfig::default(), category)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn path(&self) -> &Path {
        self.db.path()
    }

    fn schema(&self) -> &'static TableSchema {
        self.category.schema()
    }

    /// Append one record; unspecified trailing fields default to the
    /// empty string. Duplicates are permitted.
    pub fn insert(&self, fields: &[&str]) -> DbResult<()> {
        debug!("insert into {}", self.schema().table);
        let conn = self.db.connect()?;
        db::insert_row(&conn, self.schema(), fields)
    }

    /// Append many records in one batch; intended for initial data
    /// loading.
    pub fn bulk_insert(&self, rows: &[&[&str]]) -> DbResult<()> {
        debug!("bulk insert of {} rows into {}", rows.len(), self.schema().table);
        let mut conn = self.db.connect()?;
        db::insert_rows(&mut conn, self.schema(), rows)
    }

    /// Fetch one record by identifier; `None` if no row matches. A blank
    /// or non-numeric identifier finds nothing rather than erroring.
    pub fn get_by_id(&self, id: &str) -> DbResult<Option<Record>> {
        let conn = self.db.connect()?;
        db::get_row(&conn, self.schema(), id)
    }

    /// Every record where ANY filtered field exactly equals its filter
    /// (logical OR). Filters align with the schema columns; blank
    /// filters are excluded from matching.
    pub fn search(&self, filters: &[&str]) -> DbResult<Vec<Record>> {
        let conn = self.db.connect()?;
        db::search_rows(&conn, self.schema(), filters)
    }

    /// Overwrite every field of the record at `id`. Errors on a
    /// malformed identifier; silently affects zero rows if `id` is
    /// absent.
    pub fn update(&self, id: &str, fields: &[&str]) -> DbResult<()> {
        debug!("update {} rowid={}", self.schema().table, id);
        let conn = self.db.connect()?;
        db::update_row(&conn, self.schema(), id, fields)
    }

    /// Remove the record at `id`; no-op if absent.
    pub fn delete(&self, id: &str) -> DbResult<()> {
        debug!("delete from {} rowid={}", self.schema().table, id);
        let conn = self.db.connect()?;
        db::delete_row(&conn, self.schema(), id)
    }

    /// Every record with its identifier, in storage order.
    pub fn list_all(&self) -> DbResult<Vec<Record>> {
        let conn = self.db.connect()?;
        db::all_rows(&conn, self.schema())
    }

    /// Write the table to a CSV file at `destination`, overwriting it.
    /// The identifier column is omitted.
    pub fn export_csv(&self, destination: &Path) -> DbResult<()> {
        debug!(
            "export {} to {}",
            self.schema().table,
            destination.display()
        );
        let conn = self.db.connect()?;
        db::export::write_csv(&conn, self.schema(), destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DbError, ELECTRONICS};

    fn open_pair() -> (tempfile::TempDir, InventoryStore, InventoryStore) {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig::with_path(dir.path().join("inventory.db"));
        let electronics = InventoryStore::open(config.clone(), Category::Electronics).unwrap();
        let mechanics = InventoryStore::open(config, Category::Mechanics).unwrap();
        (dir, electronics, mechanics)
    }

    #[test]
    fn test_resistor_lifecycle() {
        let (_dir, electronics, _) = open_pair();

        electronics
            .insert(&["10k resistor", "R-100", "Resistors", "0805", "10", "kΩ", "B2", "50", ""])
            .unwrap();

        let all = electronics.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, 1);
        assert_eq!(
            all[0].fields,
            ["10k resistor", "R-100", "Resistors", "0805", "10", "kΩ", "B2", "50", ""]
        );

        electronics
            .update("1", &["10k resistor", "R-100", "Resistors", "0805", "10", "kΩ", "B2", "45", ""])
            .unwrap();
        let record = electronics.get_by_id("1").unwrap().unwrap();
        assert_eq!(record.field(&ELECTRONICS, "Amount"), Some("45"));

        electronics.delete("1").unwrap();
        assert!(electronics.get_by_id("1").unwrap().is_none());
        assert!(electronics.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_categories_are_independent() {
        let (_dir, electronics, mechanics) = open_pair();

        electronics.insert(&["relay", "K-5", "Relays"]).unwrap();
        mechanics.insert(&["bolt", "M3-10", "Bolts"]).unwrap();

        assert_eq!(electronics.list_all().unwrap().len(), 1);
        assert_eq!(mechanics.list_all().unwrap().len(), 1);
        assert_eq!(mechanics.list_all().unwrap()[0].fields[0], "bolt");
    }

    #[test]
    fn test_bulk_insert_initial_load() {
        let (_dir, _, mechanics) = open_pair();

        let rows: Vec<&[&str]> = vec![
            &["bolt", "M3-10", "Bolts", "C1", "100", ""],
            &["nut", "M3-N", "Nuts", "C1", "250", ""],
        ];
        mechanics.bulk_insert(&rows).unwrap();

        let ids: Vec<i64> = mechanics.list_all().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn test_search_union_semantics() {
        let (_dir, electronics, _) = open_pair();

        electronics
            .insert(&["r1", "R-1", "Resistors", "0805", "10", "k", "A1", "5", ""])
            .unwrap();
        electronics
            .insert(&["c1", "C-1", "Capacitors", "0603", "100", "n", "A1", "9", ""])
            .unwrap();
        electronics
            .insert(&["d1", "D-1", "Diodes", "SOD", "", "", "B7", "3", ""])
            .unwrap();

        let hits = electronics
            .search(&["", "", "Resistors", "", "", "", "A1"])
            .unwrap();
        let ids: Vec<i64> = hits.iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn test_update_malformed_id_is_error() {
        let (_dir, _, mechanics) = open_pair();
        mechanics.insert(&["bolt"]).unwrap();

        let err = mechanics.update("three", &["nut"]).unwrap_err();
        assert!(matches!(err, DbError::InvalidId(_)));

        // The failed call has no effect on later independent operations
        assert_eq!(mechanics.list_all().unwrap().len(), 1);
        mechanics.update("1", &["nut"]).unwrap();
        assert_eq!(mechanics.list_all().unwrap()[0].fields[0], "nut");
    }

    #[test]
    fn test_export_csv_via_store() {
        let (dir, _, mechanics) = open_pair();

        mechanics.insert(&["bolt", "M3-10", "Bolts", "C1", "100", ""]).unwrap();
        mechanics.insert(&["nut", "M3-N", "Nuts", "C1", "250", ""]).unwrap();

        let path = dir.path().join(mechanics.category().default_export_name());
        mechanics.export_csv(&path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let read: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect();

        let listed = mechanics.list_all().unwrap();
        assert_eq!(read.len(), listed.len());
        for (csv_row, record) in read.iter().zip(&listed) {
            assert_eq!(csv_row, &record.fields);
        }
    }
}
