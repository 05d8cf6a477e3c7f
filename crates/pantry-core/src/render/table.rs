use crate::model::InventoryItem;

use super::csv_export::CSV_HEADER;

/// Render a snapshot as an aligned text table
///
/// Header and separator are always present; numbers are right-aligned.
pub fn render_table(items: &[InventoryItem]) -> String {
    let rows: Vec<[String; 4]> = items
        .iter()
        .map(|item| {
            [
                item.id.to_string(),
                item.name.clone(),
                item.quantity.to_string(),
                item.reorder_point.to_string(),
            ]
        })
        .collect();

    let mut widths = CSV_HEADER.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>w0$}  {:<w1$}  {:>w2$}  {:>w3$}\n",
        CSV_HEADER[0],
        CSV_HEADER[1],
        CSV_HEADER[2],
        CSV_HEADER[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    ));
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    output.push_str(&separator.join("  "));
    output.push('\n');

    for row in rows {
        output.push_str(&format!(
            "{:>w0$}  {:<w1$}  {:>w2$}  {:>w3$}\n",
            row[0],
            row[1],
            row[2],
            row[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        ));
    }
    output
}
