use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use wlrm_cli::types::ConvertResult;

pub fn print_summary(result: &ConvertResult) {
    println!("Rules: {}", result.source.display());
    println!("Imports: {}", result.destination);
    let stats = &result.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Terraform resource"), header_cell("Rules")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (resource_type, count) in &stats.by_resource_type {
        table.add_row(vec![Cell::new(resource_type), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.kept).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        dim_cell("skipped (unsupported type)"),
        count_cell(stats.dropped(), Color::Yellow),
    ]);
    table.add_row(vec![
        dim_cell("incomplete identifiers"),
        count_cell(stats.incomplete, Color::Red),
    ]);
    println!("{table}");
    if stats.has_duplicates() {
        eprintln!("Duplicate addresses:");
        for address in &stats.duplicate_addresses {
            eprintln!("- {address}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
