//! Presentation collaborators over a snapshot
//!
//! All renderers are pure; writing the result somewhere is the caller's job.

pub mod csv_export;
pub mod stock_chart;
pub mod table;

pub use csv_export::{export_csv, CSV_HEADER};
pub use stock_chart::{render_stock_chart, DEFAULT_CHART_WIDTH};
pub use table::render_table;
