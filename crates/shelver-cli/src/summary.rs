//! End-of-run console output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use shelver_plan::ValidationReport;

use crate::types::RunResult;

/// Print the success summary: where the files went and how many of each
/// type were copied.
pub fn print_summary(result: &RunResult) {
    if result.dry_run {
        println!(
            "Dry run: {} row(s) validated, nothing copied.",
            result.rows
        );
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Type"), header_cell("Files")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, count) in &result.by_type {
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.copied).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    if let Some(path) = &result.audit_path {
        println!("Audit: {}", path.display());
    }
    println!("Done. Check the {} directory.", result.output_dir.display());
}

/// Print the consolidated validation report, grouped by failure kind.
/// Printed to stderr; the run copied nothing.
pub fn print_violations(report: &ValidationReport) {
    eprintln!(
        "Validation failed with {} problem(s); no files were copied.",
        report.len()
    );
    for (label, lines) in report.grouped() {
        eprintln!();
        eprintln!("{label}:");
        for line in lines {
            eprintln!("  - {line}");
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
