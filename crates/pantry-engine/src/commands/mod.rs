//! Command and query surfaces over the ledger
//!
//! ## Logging Ownership
//!
//! This layer owns lifecycle logging: `log_op_start!` at entry, then
//! `log_op_end!` or `log_op_error!`. The store only emits `tracing::debug!`.

pub mod ledger_command;
pub mod ledger_query;
