//! Add command
//!
//! Usage: pantry add <NAME> --quantity <N> --reorder-point <N>

use clap::Args;
use pantry_engine::commands::ledger_command::{LedgerCommand, LedgerCommandResult};

use super::{print_view, CliResult, Session};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Item name
    pub name: String,

    /// Units on hand
    #[arg(short, long, allow_negative_numbers = true)]
    pub quantity: i64,

    /// Reorder when stock falls below this
    #[arg(short, long, allow_negative_numbers = true)]
    pub reorder_point: i64,
}

pub fn execute(args: AddArgs, session: &mut Session) -> CliResult {
    let result = session.command(LedgerCommand::AddItem {
        name: args.name.clone(),
        quantity: args.quantity,
        reorder_point: args.reorder_point,
    })?;

    if let LedgerCommandResult::ItemAdded { id } = result {
        println!("✓ {} added to the pantry (id {})", args.name, id);
    }
    print_view(session)
}
