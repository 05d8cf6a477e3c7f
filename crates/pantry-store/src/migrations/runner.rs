//! Migration runner
//!
//! Applies embedded migrations once each, recording their checksums.

#![allow(clippy::result_large_err)]

use crate::errors::{checksum_mismatch, from_rusqlite, migration_error, Result};
use crate::migrations::checksums::compute_checksum;
use crate::migrations::embedded::get_migrations;
use rusqlite::{Connection, OptionalExtension};

/// Apply all pending migrations to the database
///
/// Safe to call on every start: applied migrations are skipped. A migration
/// whose recorded checksum differs from the embedded SQL is an error.
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    create_schema_version_table(conn)?;

    for migration in get_migrations() {
        apply_migration(conn, migration.id, migration.sql)?;
    }

    Ok(())
}

/// Create the schema_version table if it doesn't exist
fn create_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT
        )",
        [],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

/// Apply a single migration if not already applied
fn apply_migration(conn: &mut Connection, migration_id: &str, sql: &str) -> Result<()> {
    let checksum = compute_checksum(sql);

    let recorded: Option<Option<String>> = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?",
            [migration_id],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)?;

    match recorded {
        Some(Some(existing)) if existing != checksum => {
            return Err(checksum_mismatch(migration_id, &existing, &checksum));
        }
        Some(_) => {
            tracing::debug!(migration_id, "migration already applied");
            return Ok(());
        }
        None => {}
    }

    let tx = conn.transaction().map_err(from_rusqlite)?;

    tx.execute_batch(sql)
        .map_err(|e| migration_error(migration_id, &e.to_string()))?;

    let now = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?, ?, ?)",
        rusqlite::params![migration_id, now, checksum],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;
    tracing::debug!(migration_id, "migration applied");

    Ok(())
}
