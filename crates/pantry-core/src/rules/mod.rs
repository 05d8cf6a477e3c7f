pub mod validation;

pub use validation::{validate_new_item, validate_sale_quantity};
