/// Connection Management Module
///
/// This module owns the single long-lived SQLite connection the tool works
/// with. The handle is created once at startup, lent to every data access
/// call and released exactly once at shutdown.

use crate::core::{EmptrackError, Result};
use rusqlite::{Connection, OpenFlags};
use tracing::{debug, error, info};

/// Pragmas applied to every new connection
const CONNECTION_PRAGMAS: &str = "PRAGMA foreign_keys = ON;";

/// Process-scoped database handle
#[derive(Debug)]
pub struct Database {
    conn: Connection,
    /// Path to the database file (None for in-memory databases)
    path: Option<String>,
}

impl Database {
    /// Opens an existing SQLite database at the specified path
    ///
    /// The schema is expected to be provisioned already, so a missing file
    /// is reported as an error instead of silently creating an empty
    /// database. `":memory:"` opens a private in-memory database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the SQLite database file, or ":memory:"
    ///
    /// # Returns
    ///
    /// The open handle, or `EmptrackError::Database` on failure.
    pub fn open(db_path: &str) -> Result<Self> {
        if db_path == ":memory:" {
            return Self::open_in_memory();
        }

        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(db_path, flags).map_err(|e| {
            error!(path = db_path, error = %e, "failed to open database");
            EmptrackError::Database(e)
        })?;

        let db = Database {
            conn,
            path: Some(db_path.to_string()),
        };
        db.apply_pragmas()?;
        info!(path = db_path, "connected to database");
        Ok(db)
    }

    /// Opens a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Database { conn, path: None };
        db.apply_pragmas()?;
        debug!("connected to in-memory database");
        Ok(db)
    }

    fn apply_pragmas(&self) -> Result<()> {
        self.conn.execute_batch(CONNECTION_PRAGMAS).map_err(|e| {
            error!(error = %e, "failed to configure connection");
            EmptrackError::Database(e)
        })
    }

    /// Borrows the underlying connection for a data access call
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Gets the database path (None for in-memory databases)
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Releases the connection
    ///
    /// Consumes the handle, so the connection cannot be used or closed
    /// twice.
    pub fn close(self) -> Result<()> {
        let path = self.path;
        self.conn.close().map_err(|(_, e)| {
            error!(error = %e, "failed to close database connection");
            EmptrackError::Database(e)
        })?;
        info!(path = path.as_deref().unwrap_or(":memory:"), "database connection closed");
        Ok(())
    }
}
