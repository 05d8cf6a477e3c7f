//! Read-only queries against the ledger.
//!
//! Every query re-reads the full snapshot, so the answer always reflects the
//! last committed command.

#![allow(clippy::result_large_err)]

use pantry_core::model::InventoryItem;
use pantry_core::render::{export_csv, render_stock_chart, render_table};
use pantry_core::reorder::reorder_alerts;
use pantry_core::{log_op_end, log_op_error, log_op_start};
use pantry_store::errors::{domain_error, Result};
use pantry_store::Ledger;

/// Read-only queries supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerQuery {
    /// Every item, in insertion order.
    Snapshot,
    /// Snapshot plus the reorder alerts computed from it.
    View,
    /// Names of items below their reorder point.
    ReorderAlerts,
    /// Snapshot encoded as CSV.
    ExportCsv,
    /// Text bar chart of stock levels.
    StockChart { width: usize },
    /// Aligned text table.
    Table,
}

impl LedgerQuery {
    /// Operation name used in logs.
    pub fn op_name(&self) -> &'static str {
        match self {
            LedgerQuery::Snapshot => "query_snapshot",
            LedgerQuery::View => "query_view",
            LedgerQuery::ReorderAlerts => "query_reorder_alerts",
            LedgerQuery::ExportCsv => "query_export_csv",
            LedgerQuery::StockChart { .. } => "query_stock_chart",
            LedgerQuery::Table => "query_table",
        }
    }
}

/// A fresh snapshot together with what the reorder evaluator made of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerView {
    pub items: Vec<InventoryItem>,
    pub alerts: Vec<String>,
}

/// Result of a ledger query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerQueryResult {
    Snapshot(Vec<InventoryItem>),
    View(LedgerView),
    ReorderAlerts(Vec<String>),
    ExportCsv(Vec<u8>),
    StockChart(String),
    Table(String),
}

/// Run a query against the ledger.
pub fn apply_ledger_query(query: LedgerQuery, ledger: &Ledger) -> Result<LedgerQueryResult> {
    let op = query.op_name();
    log_op_start!(op);
    let start = std::time::Instant::now();

    let result = run_query(query, ledger).map_err(|e| {
        log_op_error!(op, e.clone(), duration_ms = start.elapsed().as_millis() as u64);
        e
    })?;

    log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64);
    Ok(result)
}

fn run_query(query: LedgerQuery, ledger: &Ledger) -> Result<LedgerQueryResult> {
    let items = ledger.load_all()?;

    let result = match query {
        LedgerQuery::Snapshot => LedgerQueryResult::Snapshot(items),
        LedgerQuery::View => {
            let alerts = reorder_alerts(&items);
            LedgerQueryResult::View(LedgerView { items, alerts })
        }
        LedgerQuery::ReorderAlerts => LedgerQueryResult::ReorderAlerts(reorder_alerts(&items)),
        LedgerQuery::ExportCsv => LedgerQueryResult::ExportCsv(
            export_csv(&items).map_err(|e| domain_error("export_csv", e))?,
        ),
        LedgerQuery::StockChart { width } => {
            LedgerQueryResult::StockChart(render_stock_chart(&items, width))
        }
        LedgerQuery::Table => LedgerQueryResult::Table(render_table(&items)),
    };

    Ok(result)
}
