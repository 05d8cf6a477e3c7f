//! Stock-floor policy trait and implementations
//!
//! A sale asks the policy what a row's quantity becomes. The policy is
//! injected by the caller, so the ledger itself never decides whether stock
//! may go negative.

use crate::errors::{PantryError, Result};

/// Policy deciding the quantity left after a sale
pub trait StockFloorPolicy {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Quantity remaining after selling `requested` units of `available`
    ///
    /// # Errors
    /// Returns `PantryError::InsufficientStock` when the policy refuses the
    /// sale, or `PantryError::InvalidSale` when the arithmetic overflows.
    fn settle(&self, item_name: &str, available: i64, requested: i64) -> Result<i64>;
}

fn checked_remaining(item_name: &str, available: i64, requested: i64) -> Result<i64> {
    available
        .checked_sub(requested)
        .ok_or_else(|| PantryError::InvalidSale {
            reason: format!(
                "selling {} of {} from {} overflows",
                requested, item_name, available
            ),
        })
}

/// Refuse any sale that would leave a row below zero (default)
///
/// A row that is already negative still accepts a sale of zero units.
///
/// # Example
/// ```
/// use pantry_core::policy::{RejectNegativePolicy, StockFloorPolicy};
///
/// let policy = RejectNegativePolicy;
/// assert_eq!(policy.settle("Flour", 10, 4).unwrap(), 6);
/// assert!(policy.settle("Flour", 3, 4).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectNegativePolicy;

impl StockFloorPolicy for RejectNegativePolicy {
    fn name(&self) -> &'static str {
        "reject"
    }

    fn settle(&self, item_name: &str, available: i64, requested: i64) -> Result<i64> {
        let remaining = checked_remaining(item_name, available, requested)?;
        if requested > 0 && remaining < 0 {
            return Err(PantryError::InsufficientStock {
                item_name: item_name.to_string(),
                available,
                requested,
            });
        }
        Ok(remaining)
    }
}

/// Accept every sale but never push a row below zero
///
/// A row that is already negative keeps its quantity; a sale never raises
/// stock.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClampAtZeroPolicy;

impl StockFloorPolicy for ClampAtZeroPolicy {
    fn name(&self) -> &'static str {
        "clamp"
    }

    fn settle(&self, item_name: &str, available: i64, requested: i64) -> Result<i64> {
        let remaining = checked_remaining(item_name, available, requested)?;
        Ok(remaining.max(available.min(0)))
    }
}

/// Accept every sale, letting quantities go negative
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissivePolicy;

impl StockFloorPolicy for PermissivePolicy {
    fn name(&self) -> &'static str {
        "permissive"
    }

    fn settle(&self, item_name: &str, available: i64, requested: i64) -> Result<i64> {
        checked_remaining(item_name, available, requested)
    }
}
