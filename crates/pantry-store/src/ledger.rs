//! The ledger handle
//!
//! `Ledger` owns the one SQLite connection a process uses. Callers construct
//! it explicitly and pass it to whatever needs the store; dropping it (or
//! calling [`Ledger::close`]) releases the connection.
//!
//! Mutations return only bookkeeping (assigned ids, rows affected). Callers
//! re-read with [`Ledger::load_all`] after writing.

#![allow(clippy::result_large_err)]

use std::path::Path;

use pantry_core::model::{InventoryItem, NewItem};
use pantry_core::policy::StockFloorPolicy;
use pantry_core::rules::{validate_new_item, validate_sale_quantity};
use rusqlite::Connection;

use crate::db;
use crate::errors::{domain_error, from_rusqlite, Result};
use crate::migrations::apply_migrations;
use crate::repo::SqliteRepo;

/// Handle over the inventory table
pub struct Ledger {
    conn: Connection,
}

impl Ledger {
    /// Open (or create) the ledger file at `path`
    ///
    /// The table is not created until [`Ledger::initialize`] runs.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = db::open(path)?;
        db::configure(&conn)?;
        Ok(Self { conn })
    }

    /// Open a throwaway in-memory ledger
    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        db::configure(&conn)?;
        Ok(Self { conn })
    }

    /// Wrap an already configured connection
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Borrow the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Ensure the inventory table exists
    ///
    /// Idempotent: repeated calls leave the schema and data untouched.
    pub fn initialize(&mut self) -> Result<()> {
        apply_migrations(&mut self.conn)
    }

    /// Every item in insertion (primary-key) order
    pub fn load_all(&self) -> Result<Vec<InventoryItem>> {
        let items = SqliteRepo::list_items(&self.conn)?;
        tracing::debug!(row_count = items.len(), "loaded inventory snapshot");
        Ok(items)
    }

    /// Look up one item by id
    pub fn find_item(&self, id: i64) -> Result<Option<InventoryItem>> {
        SqliteRepo::get_item(&self.conn, id)
    }

    /// Insert one item and return its assigned id
    ///
    /// # Errors
    /// `InvalidInput` for negative numbers, `Persistence` if
    /// the write fails.
    pub fn add_item(&mut self, name: &str, quantity: i64, reorder_point: i64) -> Result<i64> {
        let item = NewItem::new(name, quantity, reorder_point);
        validate_new_item(&item).map_err(|e| domain_error("add_item", e))?;

        let id = SqliteRepo::insert_item(&self.conn, &item)?;
        tracing::debug!(item_id = id, item_name = name, "inserted item");
        Ok(id)
    }

    /// Insert a batch of items atomically and return their ids in order
    ///
    /// Every item is validated before anything is written; if any insert
    /// fails the whole batch is rolled back.
    pub fn add_items(&mut self, batch: &[NewItem]) -> Result<Vec<i64>> {
        if batch.is_empty() {
            return Ok(Vec::new());
        }

        for item in batch {
            validate_new_item(item).map_err(|e| domain_error("add_items", e))?;
        }

        let tx = self.conn.transaction().map_err(from_rusqlite)?;
        let mut ids = Vec::with_capacity(batch.len());
        for item in batch {
            ids.push(SqliteRepo::insert_item(&tx, item)?);
        }
        tx.commit().map_err(from_rusqlite)?;

        tracing::debug!(row_count = ids.len(), "inserted item batch");
        Ok(ids)
    }

    /// Record a sale against every row named `name`
    ///
    /// Returns the number of rows changed: 0 for an unknown name, more than
    /// 1 when several rows share the name. Rows with a NULL quantity are
    /// left alone. All matching rows are settled
    /// through `policy` first; if it refuses any of them, nothing changes.
    pub fn sell(
        &mut self,
        name: &str,
        quantity_sold: i64,
        policy: &dyn StockFloorPolicy,
    ) -> Result<usize> {
        validate_sale_quantity(quantity_sold).map_err(|e| domain_error("sell", e))?;

        let tx = self.conn.transaction().map_err(from_rusqlite)?;
        let rows = SqliteRepo::find_sellable_by_name(&tx, name)?;
        let affected = settle_rows(&tx, &rows, quantity_sold, policy, "sell")?;
        tx.commit().map_err(from_rusqlite)?;

        if affected > 1 {
            tracing::warn!(
                item_name = name,
                rows_affected = affected,
                "sale applied to several rows sharing one name"
            );
        }
        Ok(affected)
    }

    /// Record a sale against a single row by id
    ///
    /// Returns 1 when the row exists with a recorded quantity, 0 otherwise.
    pub fn sell_by_id(
        &mut self,
        id: i64,
        quantity_sold: i64,
        policy: &dyn StockFloorPolicy,
    ) -> Result<usize> {
        validate_sale_quantity(quantity_sold).map_err(|e| domain_error("sell_by_id", e))?;

        let tx = self.conn.transaction().map_err(from_rusqlite)?;
        let rows: Vec<InventoryItem> = SqliteRepo::get_sellable_item(&tx, id)?
            .into_iter()
            .collect();
        let affected = settle_rows(&tx, &rows, quantity_sold, policy, "sell_by_id")?;
        tx.commit().map_err(from_rusqlite)?;

        Ok(affected)
    }

    /// Release the connection, surfacing any error SQLite reports on close
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| from_rusqlite(e))
    }
}

fn settle_rows(
    conn: &Connection,
    rows: &[InventoryItem],
    quantity_sold: i64,
    policy: &dyn StockFloorPolicy,
    op: &str,
) -> Result<usize> {
    let settled = rows
        .iter()
        .map(|row| {
            policy
                .settle(&row.name, row.quantity, quantity_sold)
                .map(|remaining| (row.id, remaining))
        })
        .collect::<pantry_core::Result<Vec<_>>>()
        .map_err(|e| domain_error(op, e))?;

    let mut affected = 0;
    for (id, remaining) in settled {
        affected += SqliteRepo::update_quantity(conn, id, remaining)?;
    }

    tracing::debug!(
        policy = policy.name(),
        rows_affected = affected,
        quantity_sold,
        "settled sale"
    );
    Ok(affected)
}
