pub mod item;

pub use item::{InventoryItem, NewItem};
