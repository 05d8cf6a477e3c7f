use serde::{Deserialize, Serialize};

/// One persisted pantry row
///
/// Field names serialize as the persisted column names, so a snapshot
/// exported to CSV or JSON carries the same header as the `inventory` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Store-assigned primary key, immutable after creation
    pub id: i64,

    /// Display name (not unique)
    #[serde(rename = "item_name")]
    pub name: String,

    /// Units currently on hand
    pub quantity: i64,

    /// Threshold below which a reorder alert fires
    pub reorder_point: i64,
}

impl InventoryItem {
    pub fn new(id: i64, name: impl Into<String>, quantity: i64, reorder_point: i64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            reorder_point,
        }
    }

    /// True when stock is strictly below the reorder point
    pub fn needs_reorder(&self) -> bool {
        self.quantity < self.reorder_point
    }
}

/// An item that has not been stored yet (no id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    #[serde(rename = "item_name")]
    pub name: String,
    pub quantity: i64,
    pub reorder_point: i64,
}

impl NewItem {
    pub fn new(name: impl Into<String>, quantity: i64, reorder_point: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
            reorder_point,
        }
    }
}
