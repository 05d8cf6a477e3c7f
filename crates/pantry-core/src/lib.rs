//! Pantry Core - in-memory domain kernel of the pantry ledger
//!
//! This crate provides everything that does not touch the database:
//! - `InventoryItem` / `NewItem` models
//! - The reorder evaluator (pure filter over a snapshot)
//! - Validation rules and the stock-floor policy applied to sales
//! - The built-in sample batch
//! - Render collaborators (CSV export, stock chart, text table)
//! - The structured error facility and logging facility shared by all crates

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod policy;
pub mod render;
pub mod reorder;
pub mod rules;
pub mod sample;

// Macros expand to paths under this re-export
pub use pantry_core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, PantryError, Result};
pub use model::{InventoryItem, NewItem};
pub use policy::{ClampAtZeroPolicy, PermissivePolicy, RejectNegativePolicy, StockFloorPolicy};
pub use reorder::{reorder_alert_message, reorder_alerts};
pub use sample::sample_batch;
