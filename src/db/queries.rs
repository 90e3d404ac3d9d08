//! Database Queries
//!
//! One generic set of parameterized CRUD queries, driven by a
//! [`TableSchema`] so both category tables share a single code path.
//! SQL text is assembled from the fixed column lists in
//! [`schema`](super::schema); all values are bound as parameters.

use rusqlite::{params_from_iter, Connection, OptionalExtension, Row, ToSql};

use super::{
    models::Record,
    schema::TableSchema,
    DbError, DbResult,
};

/// Bound in place of an omitted search filter or a blank identifier.
/// Contains control characters, so no form-entered value can equal it and
/// the bound column is effectively excluded from matching.
const NO_MATCH: &str = "\u{1}unset\u{1}";

/// Pad `values` with empty strings up to the schema's column count.
/// More values than columns is an error.
fn pad_fields<'a>(schema: &TableSchema, values: &[&'a str]) -> DbResult<Vec<&'a str>> {
    if values.len() > schema.column_count() {
        return Err(DbError::ColumnCount {
            expected: schema.column_count(),
            got: values.len(),
        });
    }

    let mut padded = values.to_vec();
    padded.resize(schema.column_count(), "");
    Ok(padded)
}

/// `?1, ?2, ...` covering every column of the schema.
fn placeholders(schema: &TableSchema) -> String {
    (1..=schema.column_count())
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ")
}

fn row_to_record(schema: &TableSchema, row: &Row) -> rusqlite::Result<Record> {
    let fields = (1..=schema.column_count())
        .map(|i| row.get(i))
        .collect::<rusqlite::Result<Vec<String>>>()?;

    Ok(Record {
        id: row.get(0)?,
        fields,
    })
}

/// Append one record; the store assigns the rowid. Missing trailing
/// fields default to the empty string. Duplicates are permitted.
pub fn insert_row(conn: &Connection, schema: &TableSchema, values: &[&str]) -> DbResult<()> {
    let values = pad_fields(schema, values)?;

    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        schema.table,
        schema.column_list(),
        placeholders(schema),
    );
    conn.execute(&sql, params_from_iter(values.iter()))?;

    Ok(())
}

/// Append many records in one batch: a single transaction reusing one
/// prepared statement. Same per-row defaulting as [`insert_row`].
pub fn insert_rows(
    conn: &mut Connection,
    schema: &TableSchema,
    rows: &[&[&str]],
) -> DbResult<()> {
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        schema.table,
        schema.column_list(),
        placeholders(schema),
    );

    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(&sql)?;
        for row in rows {
            let values = pad_fields(schema, row)?;
            stmt.execute(params_from_iter(values.iter()))?;
        }
    }
    tx.commit()?;

    Ok(())
}

/// Fetch the record at `id`, or `None` if no row matches.
///
/// The identifier is bound as supplied: a blank id is swapped for a
/// no-match sentinel and a non-numeric id simply finds nothing, so the
/// lookup never errors on caller input.
pub fn get_row(conn: &Connection, schema: &TableSchema, id: &str) -> DbResult<Option<Record>> {
    let id = if id.is_empty() { NO_MATCH } else { id };

    let sql = format!(
        "SELECT rowid, {} FROM {} WHERE rowid = ?1",
        schema.column_list(),
        schema.table,
    );

    let record = conn
        .query_row(&sql, [id], |row| row_to_record(schema, row))
        .optional()?;

    Ok(record)
}

/// Return every record where ANY filtered column exactly equals its
/// filter value (logical OR across columns).
///
/// Filters align positionally with the schema columns; empty filters are
/// replaced by the sentinel and so match nothing. OR semantics are the
/// contract here: a two-field search returns the union of the per-field
/// matches, not the intersection.
pub fn search_rows(
    conn: &Connection,
    schema: &TableSchema,
    filters: &[&str],
) -> DbResult<Vec<Record>> {
    let filters: Vec<&str> = pad_fields(schema, filters)?
        .into_iter()
        .map(|f| if f.is_empty() { NO_MATCH } else { f })
        .collect();

    let clauses = schema
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| format!("\"{}\" = ?{}", col, i + 1))
        .collect::<Vec<_>>()
        .join(" OR ");

    let sql = format!(
        "SELECT rowid, {} FROM {} WHERE {}",
        schema.column_list(),
        schema.table,
        clauses,
    );

    let mut stmt = conn.prepare(&sql)?;
    let records = stmt
        .query_map(params_from_iter(filters.iter()), |row| {
            row_to_record(schema, row)
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(records)
}

/// Overwrite every field of the record at `id`.
///
/// The identifier must parse as an integer; a malformed id is a store
/// error the caller must handle. An id that matches no row affects zero
/// rows and is not an error.
pub fn update_row(
    conn: &Connection,
    schema: &TableSchema,
    id: &str,
    values: &[&str],
) -> DbResult<()> {
    let rowid: i64 = id
        .trim()
        .parse()
        .map_err(|_| DbError::InvalidId(id.to_string()))?;

    let values = pad_fields(schema, values)?;

    let assignments = schema
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| format!("\"{}\" = ?{}", col, i + 1))
        .collect::<Vec<_>>()
        .join(", ");

    let sql = format!(
        "UPDATE {} SET {} WHERE rowid = ?{}",
        schema.table,
        assignments,
        schema.column_count() + 1,
    );

    let mut params: Vec<&dyn ToSql> = values.iter().map(|v| v as &dyn ToSql).collect();
    params.push(&rowid);
    conn.execute(&sql, params.as_slice())?;

    Ok(())
}

/// Remove the record at `id`; no-op if absent or blank.
pub fn delete_row(conn: &Connection, schema: &TableSchema, id: &str) -> DbResult<()> {
    let id = if id.is_empty() { NO_MATCH } else { id };

    let sql = format!("DELETE FROM {} WHERE rowid = ?1", schema.table);
    conn.execute(&sql, [id])?;

    Ok(())
}

/// Every record with its rowid, in storage order (no ORDER BY).
pub fn all_rows(conn: &Connection, schema: &TableSchema) -> DbResult<Vec<Record>> {
    let sql = format!(
        "SELECT rowid, {} FROM {}",
        schema.column_list(),
        schema.table,
    );

    let mut stmt = conn.prepare(&sql)?;
    let records = stmt
        .query_map([], |row| row_to_record(schema, row))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(records)
}
