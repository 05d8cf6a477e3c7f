//! Pantry CLI
//!
//! Command-line front end for the pantry inventory ledger

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pantry_core::logging_facility::{self, Profile};
use pantry_core_types::RequestId;

mod commands;

use commands::{LogFormat, Session, StockFloor};

#[derive(Debug, Parser)]
#[command(name = "pantry")]
#[command(about = "Pantry inventory tracker", long_about = None)]
struct Cli {
    /// Ledger database file
    #[arg(long, global = true, default_value = "pantry_inventory.db")]
    db: PathBuf,

    /// Log output on stderr (default: off unless RUST_LOG is set)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    /// What a sale does when stock would drop below zero
    #[arg(long, global = true, value_enum, default_value_t = StockFloor::Reject)]
    stock_floor: StockFloor,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the inventory table if it does not exist
    Init,
    /// Show current inventory
    List(commands::list::ListArgs),
    /// Add a new item
    Add(commands::add::AddArgs),
    /// Record a sale
    Sell(commands::sell::SellArgs),
    /// Add the sample pantry items
    Sample,
    /// Show items that need reordering
    Alerts,
    /// Export inventory as CSV
    Export(commands::export::ExportArgs),
    /// Show a bar chart of stock levels
    Chart(commands::chart::ChartArgs),
}

fn init_logging(format: Option<LogFormat>) {
    let profile = match format {
        Some(LogFormat::Json) => Some(Profile::Production),
        Some(LogFormat::Human) => Some(Profile::Development),
        None if std::env::var_os("RUST_LOG").is_some() => Some(Profile::Development),
        None => None,
    };
    if let Some(profile) = profile {
        logging_facility::init(profile);
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    let request_id = RequestId::new();
    let span = tracing::info_span!("interaction", request_id = %request_id);
    let _guard = span.enter();

    // Startup failures are fatal
    let mut session = match Session::start(&cli.db, cli.stock_floor, &request_id) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Init => commands::init::execute(&session, &cli.db),
        Commands::List(args) => commands::list::execute(args, &session),
        Commands::Add(args) => commands::add::execute(args, &mut session),
        Commands::Sell(args) => commands::sell::execute(args, &mut session),
        Commands::Sample => commands::sample::execute(&mut session),
        Commands::Alerts => commands::alerts::execute(&session),
        Commands::Export(args) => commands::export::execute(args, &session),
        Commands::Chart(args) => commands::chart::execute(args, &session),
    };

    let result = result.and_then(|()| session.finish().map_err(Into::into));

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
