use crate::prices_model::{AlchMargin, PriceSwing};
use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use thousands::Separable;

pub const DEFAULT_LIMIT: usize = 10;

fn new_table(header: Vec<&str>, right_aligned_columns: &[usize], rows: Vec<Vec<String>>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_MARKDOWN)
        .force_no_tty()
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(header);

    for row in rows {
        table.add_row(row);
    }

    for idx in right_aligned_columns {
        if let Some(column) = table.column_mut(*idx) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table
}

/// Header, separator and at most `limit` rows.
pub fn render_alch_margins(margins: &[AlchMargin], limit: usize) -> String {
    let rows = margins
        .iter()
        .take(limit)
        .map(|m| {
            vec![
                m.item_id.to_string(),
                m.name.clone(),
                m.high_alch.separate_with_commas(),
                m.buy_price.separate_with_commas(),
                m.alch_margin.separate_with_commas(),
            ]
        })
        .collect();

    new_table(
        vec!["Item ID", "Name", "High Alch", "Buy Price", "Margin"],
        &[0, 2, 3, 4],
        rows,
    )
    .to_string()
}

pub fn render_price_swings(swings: &[PriceSwing], limit: usize) -> String {
    let rows = swings
        .iter()
        .take(limit)
        .map(|s| {
            vec![
                s.item_id.to_string(),
                s.high.separate_with_commas(),
                s.low.separate_with_commas(),
                format!("{:.2}", s.percentage_diff),
            ]
        })
        .collect();

    new_table(vec!["Item ID", "High", "Low", "Swing %"], &[0, 1, 2, 3], rows).to_string()
}

pub fn print_alch_margins(margins: &[AlchMargin], limit: usize) {
    println!("{}", render_alch_margins(margins, limit));
}

pub fn print_price_swings(swings: &[PriceSwing], limit: usize) {
    println!("{}", render_price_swings(swings, limit));
}
