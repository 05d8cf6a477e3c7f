//! List command
//!
//! Usage: pantry list [--json]

use clap::Args;

use super::{print_view, CliResult, Session};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print the snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ListArgs, session: &Session) -> CliResult {
    if args.json {
        let view = session.view()?;
        println!("{}", serde_json::to_string_pretty(&view.items)?);
        return Ok(());
    }
    print_view(session)
}
