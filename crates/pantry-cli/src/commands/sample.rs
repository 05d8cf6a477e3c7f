//! Sample command
//!
//! Usage: pantry sample

use pantry_engine::commands::ledger_command::LedgerCommand;

use super::{print_view, CliResult, Session};

pub fn execute(session: &mut Session) -> CliResult {
    session.command(LedgerCommand::LoadSample)?;
    println!("✓ Sample items added to the pantry!");
    print_view(session)
}
