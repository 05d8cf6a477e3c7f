use crate::errors::{PantryError, Result};
use crate::model::NewItem;

/// Validate an item before it is inserted
///
/// Rejects negative quantities or reorder points. Any name is accepted,
/// including an empty one.
///
/// # Errors
/// Returns `PantryError::InvalidItem` describing the first violation.
pub fn validate_new_item(item: &NewItem) -> Result<()> {
    if item.quantity < 0 {
        return Err(PantryError::InvalidItem {
            reason: format!(
                "quantity for {} must be >= 0, got {}",
                item.name, item.quantity
            ),
        });
    }

    if item.reorder_point < 0 {
        return Err(PantryError::InvalidItem {
            reason: format!(
                "reorder point for {} must be >= 0, got {}",
                item.name, item.reorder_point
            ),
        });
    }

    Ok(())
}

/// Validate the quantity of a sale
///
/// # Errors
/// Returns `PantryError::InvalidSale` for negative quantities.
pub fn validate_sale_quantity(quantity_sold: i64) -> Result<()> {
    if quantity_sold < 0 {
        return Err(PantryError::InvalidSale {
            reason: format!("quantity sold must be >= 0, got {}", quantity_sold),
        });
    }
    Ok(())
}
