use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use osm_audit::{KeyTypeCounts, TagCounts, UserSet};
use osm_cli::pipeline::{AuditReport, ShapeSummary};

pub fn print_audit(report: &AuditReport) {
    let audit = &report.audit;
    println!("Input: {}", report.input.display());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Suffix"), header_cell("Examples")]);
    apply_table_style(&mut table);
    for (suffix, samples) in &audit.unexpected {
        let examples: Vec<&str> = samples.iter().map(String::as_str).collect();
        table.add_row(vec![
            Cell::new(suffix).fg(Color::Yellow),
            Cell::new(examples.join("\n")),
        ]);
    }
    if audit.unexpected.is_empty() {
        table.add_row(vec![dim_cell("-"), dim_cell("no unexpected suffixes")]);
    }
    println!("{table}");

    let mut table = Table::new();
    table.set_header(vec![header_cell("Unnormalized street name")]);
    apply_table_style(&mut table);
    for name in &audit.unnormalized {
        table.add_row(vec![Cell::new(format!("{name:?}"))]);
    }
    if audit.unnormalized.is_empty() {
        table.add_row(vec![dim_cell("none")]);
    }
    println!("{table}");

    if let Some(suggestions) = &report.suggestions {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Street name"), header_cell("Updated name")]);
        apply_table_style(&mut table);
        for suggestion in suggestions {
            let updated = if suggestion.updated == suggestion.original {
                dim_cell(&suggestion.updated)
            } else {
                Cell::new(&suggestion.updated).fg(Color::Green)
            };
            table.add_row(vec![Cell::new(&suggestion.original), updated]);
        }
        println!("{table}");
    }
}

pub fn print_shape_summary(summary: &ShapeSummary) {
    if let Some(path) = &summary.output {
        println!("Output: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Type"), header_cell("Records")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("node"), Cell::new(summary.nodes)]);
    table.add_row(vec![Cell::new("way"), Cell::new(summary.ways)]);
    table.add_row(vec![dim_cell("skipped"), dim_cell(summary.skipped())]);
    table.add_row(vec![total_cell("TOTAL"), total_cell(summary.records())]);
    println!("{table}");
}

pub fn print_tag_counts(counts: &TagCounts) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Element"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (name, count) in counts.iter() {
        table.add_row(vec![Cell::new(name), Cell::new(count)]);
    }
    table.add_row(vec![total_cell("TOTAL"), total_cell(counts.total())]);
    println!("{table}");
}

pub fn print_key_types(counts: &KeyTypeCounts) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Key type"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (key_type, count) in counts.most_common() {
        table.add_row(vec![Cell::new(key_type), Cell::new(count)]);
    }
    table.add_row(vec![total_cell("TOTAL"), total_cell(counts.total())]);
    println!("{table}");
}

pub fn print_users(users: &UserSet) {
    println!("Distinct users: {}", users.len());
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
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

fn total_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
