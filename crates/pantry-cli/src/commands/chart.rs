//! Chart command
//!
//! Usage: pantry chart [--width <N>]

use clap::Args;
use pantry_core::render::DEFAULT_CHART_WIDTH;
use pantry_engine::commands::ledger_query::{LedgerQuery, LedgerQueryResult};

use super::{CliResult, Session};

#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Length of the longest bar
    #[arg(short, long, default_value_t = DEFAULT_CHART_WIDTH)]
    pub width: usize,
}

pub fn execute(args: ChartArgs, session: &Session) -> CliResult {
    let LedgerQueryResult::StockChart(chart) =
        session.query(LedgerQuery::StockChart { width: args.width })?
    else {
        return Err("unexpected query result".into());
    };

    if chart.is_empty() {
        println!("No inventory to chart");
    } else {
        print!("{}", chart);
    }
    Ok(())
}
