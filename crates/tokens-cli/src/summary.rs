use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tokens_cli::sync::SourceReport;

use crate::commands::NormalizeReport;

pub fn print_sync_summary(reports: &[SourceReport], dry_run: bool) {
    if dry_run {
        println!("Dry run: no files were written.");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("File"),
        header_cell("Tokens"),
        header_cell("Path"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    let mut total_files = 0usize;
    let mut total_tokens = 0usize;
    for report in reports {
        for file in &report.files {
            total_files += 1;
            total_tokens += file.tokens;
            table.add_row(vec![
                Cell::new(&report.file_key),
                Cell::new(&file.name),
                Cell::new(file.tokens),
                path_cell(&file.path.display().to_string(), file.written),
            ]);
        }
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{total_files} files"))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_tokens).add_attribute(Attribute::Bold),
        Cell::new("-").add_attribute(Attribute::Dim),
    ]);
    println!("{table}");
}

pub fn print_normalize_summary(report: &NormalizeReport) {
    println!("Canonical tokens: {}", report.output.display());
    println!("Groups: {}", report.groups);
    println!("Tokens: {}", report.tokens);
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn path_cell(path: &str, written: bool) -> Cell {
    if written {
        Cell::new(path)
    } else {
        Cell::new(path).add_attribute(Attribute::Dim)
    }
}
