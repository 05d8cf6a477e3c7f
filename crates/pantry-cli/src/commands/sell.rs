//! Sell command
//!
//! Usage: pantry sell <NAME> --quantity <N>
//!        pantry sell --id <ID> --quantity <N>

use clap::Args;
use pantry_engine::commands::ledger_command::{LedgerCommand, LedgerCommandResult};

use super::{print_view, CliResult, Session};

#[derive(Debug, Args)]
pub struct SellArgs {
    /// Item name (every row with this name is updated)
    #[arg(required_unless_present = "id", conflicts_with = "id")]
    pub name: Option<String>,

    /// Sell from a single row by id
    #[arg(long)]
    pub id: Option<i64>,

    /// Units sold
    #[arg(short, long, allow_negative_numbers = true)]
    pub quantity: i64,
}

pub fn execute(args: SellArgs, session: &mut Session) -> CliResult {
    let (cmd, label) = match (args.name, args.id) {
        (_, Some(id)) => (
            LedgerCommand::SellById {
                id,
                quantity_sold: args.quantity,
            },
            format!("item #{}", id),
        ),
        (Some(name), None) => (
            LedgerCommand::Sell {
                name: name.clone(),
                quantity_sold: args.quantity,
            },
            name,
        ),
        (None, None) => return Err("either NAME or --id is required".into()),
    };

    let LedgerCommandResult::Sold { rows_affected } = session.command(cmd)? else {
        return Err("unexpected command result".into());
    };

    match rows_affected {
        0 => println!("No match for {}; nothing sold", label),
        1 => println!("✓ Sold {} units of {}!", args.quantity, label),
        n => println!(
            "✓ Sold {} units of {} from each of {} rows sharing that name",
            args.quantity, label, n
        ),
    }
    print_view(session)
}
