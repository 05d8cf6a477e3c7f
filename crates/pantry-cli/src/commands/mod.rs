//! Subcommands and the per-invocation session they share

pub mod add;
pub mod alerts;
pub mod chart;
pub mod export;
pub mod init;
pub mod list;
pub mod sample;
pub mod sell;

use std::path::Path;

use clap::ValueEnum;
use pantry_core::policy::{
    ClampAtZeroPolicy, PermissivePolicy, RejectNegativePolicy, StockFloorPolicy,
};
use pantry_core::render::render_table;
use pantry_core::reorder::reorder_alert_message;
use pantry_core_types::RequestId;
use pantry_engine::commands::ledger_command::{
    apply_ledger_command, LedgerCommand, LedgerCommandResult,
};
use pantry_engine::commands::ledger_query::{
    apply_ledger_query, LedgerQuery, LedgerQueryResult, LedgerView,
};
use pantry_store::Ledger;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Human,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StockFloor {
    /// Refuse sales that would leave negative stock
    Reject,
    /// Record at least zero
    Clamp,
    /// Allow negative stock
    Permissive,
}

impl StockFloor {
    pub fn policy(self) -> &'static dyn StockFloorPolicy {
        match self {
            StockFloor::Reject => &RejectNegativePolicy,
            StockFloor::Clamp => &ClampAtZeroPolicy,
            StockFloor::Permissive => &PermissivePolicy,
        }
    }
}

/// One user interaction: an open, initialized ledger plus its settings
pub struct Session {
    ledger: Ledger,
    stock_floor: StockFloor,
    request_id: RequestId,
}

impl Session {
    /// Open and initialize the ledger at `db`
    pub fn start(
        db: &Path,
        stock_floor: StockFloor,
        request_id: &RequestId,
    ) -> pantry_store::Result<Self> {
        let mut ledger = Ledger::open(db).map_err(|e| e.with_request_id(request_id.clone()))?;
        ledger
            .initialize()
            .map_err(|e| e.with_request_id(request_id.clone()))?;

        Ok(Self {
            ledger,
            stock_floor,
            request_id: request_id.clone(),
        })
    }

    pub fn command(&mut self, cmd: LedgerCommand) -> pantry_store::Result<LedgerCommandResult> {
        apply_ledger_command(cmd, &mut self.ledger, self.stock_floor.policy())
            .map_err(|e| e.with_request_id(self.request_id.clone()))
    }

    pub fn query(&self, query: LedgerQuery) -> pantry_store::Result<LedgerQueryResult> {
        apply_ledger_query(query, &self.ledger)
            .map_err(|e| e.with_request_id(self.request_id.clone()))
    }

    /// Fresh snapshot and alerts
    pub fn view(&self) -> Result<LedgerView, Box<dyn std::error::Error>> {
        match self.query(LedgerQuery::View)? {
            LedgerQueryResult::View(view) => Ok(view),
            other => Err(format!("unexpected query result: {:?}", other).into()),
        }
    }

    /// Release the ledger connection
    pub fn finish(self) -> pantry_store::Result<()> {
        self.ledger.close()
    }
}

/// Re-read the ledger and print the table followed by any reorder warning
pub fn print_view(session: &Session) -> CliResult {
    let view = session.view()?;
    print!("{}", render_table(&view.items));
    if let Some(message) = reorder_alert_message(&view.alerts) {
        println!();
        print!("{}", message);
    }
    Ok(())
}
