//! Export command
//!
//! Usage: pantry export [--output <FILE>]

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use pantry_engine::commands::ledger_query::{LedgerQuery, LedgerQueryResult};
use pantry_store::errors::io_error;

use super::{CliResult, Session};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: ExportArgs, session: &Session) -> CliResult {
    let LedgerQueryResult::ExportCsv(bytes) = session.query(LedgerQuery::ExportCsv)? else {
        return Err("unexpected query result".into());
    };

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, &bytes).map_err(|e| io_error("export_write", e))?;
        println!("✓ Exported to {}", output_path.display());
    } else {
        std::io::stdout()
            .write_all(&bytes)
            .map_err(|e| io_error("export_write", e))?;
    }
    Ok(())
}
