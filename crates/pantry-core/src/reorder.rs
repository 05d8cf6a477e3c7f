//! Reorder evaluator
//!
//! Pure and stateless: every call looks only at the snapshot it is given.

use crate::model::InventoryItem;

/// Names of every item whose quantity is below its reorder point
///
/// Input order is preserved and duplicate names are kept. An empty snapshot,
/// or one where nothing is low, yields an empty vector.
pub fn reorder_alerts(items: &[InventoryItem]) -> Vec<String> {
    items
        .iter()
        .filter(|item| item.needs_reorder())
        .map(|item| item.name.clone())
        .collect()
}

/// Warning text for a set of alerts, or `None` when there is nothing to reorder
pub fn reorder_alert_message<S: AsRef<str>>(names: &[S]) -> Option<String> {
    if names.is_empty() {
        return None;
    }

    let mut message = String::from("Reorder needed for the following items:\n");
    for name in names {
        message.push_str("* ");
        message.push_str(name.as_ref());
        message.push('\n');
    }
    Some(message)
}
