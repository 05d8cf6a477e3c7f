//! SQLite repository implementation
//!
//! Row-level reads and writes over the `inventory` table. Functions take a
//! `&Connection`; pass a `Transaction` (which derefs to one) to group writes.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use pantry_core::model::{InventoryItem, NewItem};
use rusqlite::{Connection, OptionalExtension, Row};

const SELECT_COLUMNS: &str = "SELECT id, item_name, quantity, reorder_point FROM inventory";

/// SQLite repository for inventory rows
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert one item and return the id SQLite assigned
    pub fn insert_item(conn: &Connection, item: &NewItem) -> Result<i64> {
        conn.execute(
            "INSERT INTO inventory (item_name, quantity, reorder_point) VALUES (?1, ?2, ?3)",
            rusqlite::params![item.name, item.quantity, item.reorder_point],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    /// All rows in primary-key order
    pub fn list_items(conn: &Connection) -> Result<Vec<InventoryItem>> {
        let mut stmt = conn
            .prepare(&format!("{} ORDER BY id", SELECT_COLUMNS))
            .map_err(from_rusqlite)?;

        let items = stmt
            .query_map([], map_item)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(items)
    }

    /// Rows a sale by name applies to: exact name match with a recorded
    /// quantity, in primary-key order
    pub fn find_sellable_by_name(conn: &Connection, name: &str) -> Result<Vec<InventoryItem>> {
        let mut stmt = conn
            .prepare(&format!(
                "{} WHERE item_name = ?1 AND quantity IS NOT NULL ORDER BY id",
                SELECT_COLUMNS
            ))
            .map_err(from_rusqlite)?;

        let items = stmt
            .query_map([name], map_item)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(items)
    }

    /// One row by primary key
    pub fn get_item(conn: &Connection, id: i64) -> Result<Option<InventoryItem>> {
        conn.query_row(
            &format!("{} WHERE id = ?1", SELECT_COLUMNS),
            [id],
            map_item,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// One row by primary key, if it has a recorded quantity
    pub fn get_sellable_item(conn: &Connection, id: i64) -> Result<Option<InventoryItem>> {
        conn.query_row(
            &format!("{} WHERE id = ?1 AND quantity IS NOT NULL", SELECT_COLUMNS),
            [id],
            map_item,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Overwrite a row's quantity; returns rows affected (0 or 1)
    ///
    /// A NULL quantity is never replaced.
    pub fn update_quantity(conn: &Connection, id: i64, quantity: i64) -> Result<usize> {
        conn.execute(
            "UPDATE inventory SET quantity = ?1 WHERE id = ?2 AND quantity IS NOT NULL",
            rusqlite::params![quantity, id],
        )
        .map_err(from_rusqlite)
    }
}

// Columns written by older tools may be NULL; they read back as empty/zero.
// Sales skip rows whose quantity is NULL, so the stored NULL survives.
fn map_item(row: &Row<'_>) -> rusqlite::Result<InventoryItem> {
    let id: i64 = row.get(0)?;
    let name: Option<String> = row.get(1)?;
    let quantity: Option<i64> = row.get(2)?;
    let reorder_point: Option<i64> = row.get(3)?;

    Ok(InventoryItem {
        id,
        name: name.unwrap_or_default(),
        quantity: quantity.unwrap_or(0),
        reorder_point: reorder_point.unwrap_or(0),
    })
}
