//! Init command
//!
//! Usage: pantry init

use std::path::Path;

use super::{CliResult, Session};

/// The session already initialized the ledger; report where it lives
pub fn execute(_session: &Session, db: &Path) -> CliResult {
    println!("✓ Ledger ready at {}", db.display());
    Ok(())
}
