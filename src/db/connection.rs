//! Database Connection Management
//!
//! Opens one fresh SQLite connection per operation. The `Database` handle
//! itself keeps no connection state; it validates the store once at open
//! time and hands out scoped connections afterwards.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};

use super::{schema::init_schema, DbResult};

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

impl DatabaseConfig {
    /// Create config for a specific path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Get default database path (data dir/labstock/inventory.db)
fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("labstock")
        .join("inventory.db")
}

/// Handle to the on-disk store.
///
/// Holds only the configuration; every operation acquires its own
/// [`Connection`] via [`Database::connect`] and drops it on return.
#[derive(Debug, Clone)]
pub struct Database {
    config: DatabaseConfig,
}

impl Database {
    /// Open or create the store at the configured path.
    ///
    /// Creates the parent directory if needed and ensures both category
    /// tables exist. Fails if the path is not writable; the caller cannot
    /// proceed without a store.
    pub fn open(config: DatabaseConfig) -> DbResult<Self> {
        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let db = Self { config };
        let conn = db.connect()?;
        init_schema(&conn)?;

        Ok(db)
    }

    /// Open with default configuration
    pub fn open_default() -> DbResult<Self> {
        Self::open(DatabaseConfig::default())
    }

    /// Acquire a fresh connection for one operation.
    ///
    /// The connection is released when the returned handle is dropped,
    /// on the error path included.
    pub fn connect(&self) -> DbResult<Connection> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn = Connection::open_with_flags(&self.config.path, flags)?;
        conn.busy_timeout(std::time::Duration::from_secs(5))?;

        Ok(conn)
    }

    /// Get database path
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Check if the database file exists at the configured path
    pub fn exists(&self) -> bool {
        self.config.path.exists()
    }
}
