//! CSV Export
//!
//! Writes a category table to a comma-separated file: header row of
//! column names in schema order, one line per record, rowid omitted.
//! Any existing file at the destination is overwritten.

use std::path::Path;

use rusqlite::Connection;

use super::{queries::all_rows, schema::TableSchema, DbResult};

pub fn write_csv(conn: &Connection, schema: &TableSchema, path: &Path) -> DbResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(schema.columns)?;
    for record in all_rows(conn, schema)? {
        writer.write_record(&record.fields)?;
    }
    writer.flush()?;

    Ok(())
}
