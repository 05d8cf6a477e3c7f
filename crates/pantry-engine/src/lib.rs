//! Pantry Engine - command/query orchestration
//!
//! Mutations go through `apply_ledger_command`, reads through
//! `apply_ledger_query`. Commands never return snapshot data; callers issue
//! a query afterwards to see the new state.

pub mod commands;
