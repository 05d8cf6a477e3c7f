//! Mutating commands against the ledger.

#![allow(clippy::result_large_err)]

use pantry_core::model::NewItem;
use pantry_core::policy::StockFloorPolicy;
use pantry_core::sample::sample_batch;
use pantry_core::{log_op_end, log_op_error, log_op_start};
use pantry_store::errors::Result;
use pantry_store::Ledger;

/// User actions that change stock.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerCommand {
    /// Add one item.
    AddItem {
        name: String,
        quantity: i64,
        reorder_point: i64,
    },
    /// Add several items in one transaction.
    AddItems { items: Vec<NewItem> },
    /// Add the built-in six-item sample batch.
    LoadSample,
    /// Sell from every row with this name.
    Sell { name: String, quantity_sold: i64 },
    /// Sell from one row by id.
    SellById { id: i64, quantity_sold: i64 },
}

impl LedgerCommand {
    /// Operation name used in logs.
    pub fn op_name(&self) -> &'static str {
        match self {
            LedgerCommand::AddItem { .. } => "add_item",
            LedgerCommand::AddItems { .. } => "add_items",
            LedgerCommand::LoadSample => "load_sample",
            LedgerCommand::Sell { .. } => "sell",
            LedgerCommand::SellById { .. } => "sell_by_id",
        }
    }
}

/// Bookkeeping from an applied command. Carries no inventory data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommandResult {
    /// Id assigned to the new item.
    ItemAdded { id: i64 },
    /// Ids assigned to the batch, in input order.
    ItemsAdded { ids: Vec<i64> },
    /// Rows whose quantity changed.
    Sold { rows_affected: usize },
}

/// Apply a command to the ledger, settling sales through `policy`.
pub fn apply_ledger_command(
    cmd: LedgerCommand,
    ledger: &mut Ledger,
    policy: &dyn StockFloorPolicy,
) -> Result<LedgerCommandResult> {
    let op = cmd.op_name();
    log_op_start!(op, stock_floor = policy.name());
    let start = std::time::Instant::now();

    let result = match cmd {
        LedgerCommand::AddItem {
            name,
            quantity,
            reorder_point,
        } => ledger
            .add_item(&name, quantity, reorder_point)
            .map(|id| LedgerCommandResult::ItemAdded { id }),
        LedgerCommand::AddItems { items } => ledger
            .add_items(&items)
            .map(|ids| LedgerCommandResult::ItemsAdded { ids }),
        LedgerCommand::LoadSample => ledger
            .add_items(&sample_batch())
            .map(|ids| LedgerCommandResult::ItemsAdded { ids }),
        LedgerCommand::Sell {
            name,
            quantity_sold,
        } => ledger
            .sell(&name, quantity_sold, policy)
            .map(|rows_affected| LedgerCommandResult::Sold { rows_affected }),
        LedgerCommand::SellById { id, quantity_sold } => ledger
            .sell_by_id(id, quantity_sold, policy)
            .map(|rows_affected| LedgerCommandResult::Sold { rows_affected }),
    }
    .map_err(|e| {
        log_op_error!(op, e.clone(), duration_ms = start.elapsed().as_millis() as u64);
        e
    })?;

    log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64);
    Ok(result)
}
