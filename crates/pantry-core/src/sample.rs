//! Built-in sample stock for a fresh pantry

use crate::model::NewItem;

const SAMPLE_ITEMS: [(&str, i64, i64); 6] = [
    ("Flour", 100, 20),
    ("Sugar", 50, 10),
    ("Olive Oil", 25, 5),
    ("Canned Tomatoes", 150, 30),
    ("Spaghetti", 200, 50),
    ("Rice", 300, 60),
];

/// The six sample items, in load order
pub fn sample_batch() -> Vec<NewItem> {
    SAMPLE_ITEMS
        .iter()
        .map(|&(name, quantity, reorder_point)| NewItem::new(name, quantity, reorder_point))
        .collect()
}
