//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections

use crate::errors::{from_rusqlite, io_error, Result};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// Connection tuning applied by `configure`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbOptions {
    /// How long a writer waits on another writer's lock before failing
    pub busy_timeout: Duration,
}

impl Default for DbOptions {
    fn default() -> Self {
        Self {
            busy_timeout: Duration::from_millis(5_000),
        }
    }
}

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Open a database file, creating its parent directory, and configure it
pub fn open_configured<P: AsRef<Path>>(path: P, options: &DbOptions) -> Result<Connection> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", e))?;
    }

    let conn = open(path)?;
    configure(&conn, options)?;
    Ok(conn)
}

/// Configure a connection with the workspace's standard settings
pub fn configure(conn: &Connection, options: &DbOptions) -> Result<()> {
    // Set first so the WAL switch below also waits on a concurrent opener
    conn.busy_timeout(options.busy_timeout)
        .map_err(from_rusqlite)?;

    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(from_rusqlite)?;

    // journal_mode reports the resulting mode; in-memory databases stay "memory"
    let mode: String = conn
        .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
        .map_err(from_rusqlite)?;
    tracing::debug!(journal_mode = %mode, "Configured SQLite connection");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_in_memory() {
        let conn = open_in_memory().unwrap();
        assert!(configure(&conn, &DbOptions::default()).is_ok());
    }

    #[test]
    fn test_open_configured_creates_parent_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("ledger.db");

        let conn = open_configured(&path, &DbOptions::default()).unwrap();
        drop(conn);

        assert!(path.exists());
    }
}
