//! Core types shared across the pantry ledger crates
//!
//! - **Correlation**: `RequestId` tagging one user interaction
//! - **Schema constants**: canonical field keys and event names for logging

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
