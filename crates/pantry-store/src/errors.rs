//! Error helpers for pantry-store
//!
//! Everything the store returns is an `ExError`; these helpers build the
//! store-specific flavours.

use pantry_core::errors::{ExError, ExErrorKind, PantryError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Tag a domain error with the ledger operation that raised it
pub fn domain_error(operation: &str, err: PantryError) -> ExError {
    ExError::from(err).with_op(operation.to_string())
}
