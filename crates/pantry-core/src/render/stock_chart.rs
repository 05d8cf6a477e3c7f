use crate::model::InventoryItem;

/// Bar width used when the caller has no preference
pub const DEFAULT_CHART_WIDTH: usize = 40;

const BAR_CHAR: char = '#';

/// Render a horizontal text bar chart of stock levels
///
/// Items are sorted by quantity, highest first; ties keep snapshot order.
/// Bars scale against the largest positive quantity so the longest bar is
/// `width` characters. Any positive quantity gets at least one character;
/// zero or negative quantities get none. Items below their reorder point
/// are marked with `!`.
pub fn render_stock_chart(items: &[InventoryItem], width: usize) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut sorted: Vec<&InventoryItem> = items.iter().collect();
    sorted.sort_by(|a, b| b.quantity.cmp(&a.quantity));

    let max_quantity = sorted
        .iter()
        .map(|item| item.quantity)
        .max()
        .unwrap_or(0)
        .max(0);
    let label_width = sorted
        .iter()
        .map(|item| item.name.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for item in sorted {
        let bar_len = bar_length(item.quantity, max_quantity, width);
        let marker = if item.needs_reorder() { " !" } else { "" };
        let bar: String = std::iter::repeat(BAR_CHAR).take(bar_len).collect();
        output.push_str(&format!(
            "{:<label_width$} | {} {}{}\n",
            item.name, bar, item.quantity, marker
        ));
    }
    output
}

fn bar_length(quantity: i64, max_quantity: i64, width: usize) -> usize {
    if quantity <= 0 || max_quantity <= 0 || width == 0 {
        return 0;
    }
    let scaled = i128::from(quantity) * width as i128 / i128::from(max_quantity);
    (scaled as usize).max(1)
}
