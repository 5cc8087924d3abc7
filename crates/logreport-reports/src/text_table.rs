//! Aligned plain-text tables for the txt output format.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};

use crate::spec::{Align, ReportSpec};

/// Render one report as an aligned plain-text table.
///
/// Column alignments come from the descriptor; an empty report still
/// renders its header so the section stays visible in the dump.
pub fn render_table(report: &ReportSpec) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(report.header.clone());

    for row in &report.rows {
        table.add_row(row.iter().map(|cell| Cell::new(cell.to_string())));
    }

    for (index, alignment) in report.column_alignment.iter().enumerate() {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(match alignment {
                Align::Left => CellAlignment::Left,
                Align::Right => CellAlignment::Right,
            });
        }
    }

    table.to_string()
}
