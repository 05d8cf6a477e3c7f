//! Alerts command
//!
//! Usage: pantry alerts

use pantry_core::reorder::reorder_alert_message;
use pantry_engine::commands::ledger_query::{LedgerQuery, LedgerQueryResult};

use super::{CliResult, Session};

pub fn execute(session: &Session) -> CliResult {
    let LedgerQueryResult::ReorderAlerts(alerts) = session.query(LedgerQuery::ReorderAlerts)?
    else {
        return Err("unexpected query result".into());
    };

    match reorder_alert_message(&alerts) {
        Some(message) => print!("{}", message),
        None => println!("No items need reordering"),
    }
    Ok(())
}
