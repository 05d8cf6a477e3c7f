//! Database connection management

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// How long a writer waits on another process's lock before failing
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open a SQLite database at the given path, creating the file if needed
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection for ledger use
pub fn configure(conn: &Connection) -> Result<()> {
    conn.busy_timeout(BUSY_TIMEOUT).map_err(from_rusqlite)?;

    // In-memory databases answer "memory"; only the call matters here
    let _mode: String = conn
        .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
        .map_err(from_rusqlite)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_in_memory() {
        let conn = open_in_memory().unwrap();
        assert!(configure(&conn).is_ok());
    }

    #[test]
    fn test_open_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("pantry.db");
        let conn = open(&path).unwrap();
        configure(&conn).unwrap();
        conn.execute_batch("CREATE TABLE t (x INTEGER)").unwrap();
        assert!(path.exists());
    }
}
