use crate::errors::{PantryError, Result};
use crate::model::InventoryItem;

/// Header row, matching the `inventory` table's columns
pub const CSV_HEADER: [&str; 4] = ["id", "item_name", "quantity", "reorder_point"];

/// Encode a snapshot as UTF-8 CSV
///
/// The header row is always written, so an empty snapshot still produces a
/// valid file with column names. Rows keep snapshot order.
///
/// # Errors
/// Returns `PantryError::Export` if encoding fails.
pub fn export_csv(items: &[InventoryItem]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for item in items {
        writer.serialize(item)?;
    }

    writer.into_inner().map_err(|e| PantryError::Export {
        reason: e.to_string(),
    })
}
