//! Pantry Store - SQLite persistence for the inventory ledger
//!
//! Provides:
//! - Connection management (`db`)
//! - Embedded, checksummed schema migrations
//! - Row-level repository functions (`repo`)
//! - The `Ledger` handle owning the process-wide connection

pub mod db;
pub mod errors;
pub mod ledger;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use ledger::Ledger;
