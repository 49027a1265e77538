use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use argic_depot::DepotsResponse;
use argic_model::{CodeBreakdown, SegmentTable, WindowPriorityTable};
use argic_standards::{TableSet, VerifySummary};

pub fn print_breakdown(breakdown: &CodeBreakdown) {
    println!("Code: {}", breakdown.code);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Segment"),
        header_cell("Name"),
        header_cell("Code"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for segment in &breakdown.segments {
        table.add_row(vec![
            Cell::new(segment.kind.label()),
            Cell::new(&segment.name),
            code_cell(&segment.code),
        ]);
    }
    println!("{table}");
    match &breakdown.matched_window {
        Some(window) => println!("Matched window: {window}"),
        None => println!("Matched window: none (default position)"),
    }
    println!("Stripe: {}", breakdown.stripe);
    println!("Modifications: {}", breakdown.modifications);
}

pub fn print_segment_table(table: &SegmentTable) {
    let with_group = table.iter().any(|entry| entry.group.is_some());
    let with_label = table.iter().any(|entry| entry.label.is_some());

    let mut header = Vec::new();
    if with_group {
        header.push(header_cell("Group"));
    }
    header.push(header_cell("Name"));
    header.push(header_cell("Code"));
    if with_label {
        header.push(header_cell("Label"));
    }

    let mut out = Table::new();
    out.set_header(header);
    apply_table_style(&mut out);
    align_column(&mut out, usize::from(with_group) + 1, CellAlignment::Center);
    for entry in table.iter() {
        let mut row = Vec::new();
        if with_group {
            row.push(optional_cell(entry.group.as_deref()));
        }
        row.push(Cell::new(&entry.name));
        row.push(code_cell(&entry.code));
        if with_label {
            row.push(optional_cell(entry.label.as_deref()));
        }
        out.add_row(row);
    }
    println!("{out}");
    println!("{} {} entries", table.len(), table.kind());
}

pub fn print_window_table(windows: &WindowPriorityTable, glass_positions: &SegmentTable) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Window"),
        header_cell("Position"),
        header_cell("Code"),
        header_cell("Label"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    for (index, entry) in windows.iter().enumerate() {
        let code = glass_positions
            .get(&entry.position)
            .map_or_else(|| dim_cell("-"), code_cell);
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&entry.window),
            Cell::new(&entry.position),
            code,
            optional_cell(entry.label.as_deref()),
        ]);
    }
    println!("{table}");
}

pub fn print_table_counts(tables: &TableSet) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Table"), header_cell("Entries")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("manufacturers", tables.manufacturers.len()),
        ("models", tables.models.len()),
        ("glass", tables.glass_positions.len()),
        ("windows", tables.windows.len()),
        ("colors", tables.colors.len()),
        ("stripes", tables.stripes.len()),
        ("modifications", tables.modifications.len()),
    ];
    for (name, count) in rows {
        table.add_row(vec![Cell::new(name), Cell::new(count)]);
    }
    println!("{table}");
}

pub fn print_verify_summary(summary: &VerifySummary) {
    println!("Tables: {}", summary.tables_dir.display());
    println!("Files verified: {}", summary.file_count);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Table"), header_cell("Entries")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("manufacturers", summary.manufacturer_count),
        ("models", summary.model_count),
        ("glass", summary.glass_position_count),
        ("windows", summary.window_count),
        ("colors", summary.color_count),
        ("stripes", summary.stripe_count),
        ("modifications", summary.modification_count),
    ];
    for (name, count) in rows {
        table.add_row(vec![Cell::new(name), Cell::new(count)]);
    }
    println!("{table}");
}

pub fn print_depots(response: &DepotsResponse) {
    println!("Status: {}", response.status);
    if let Some(message) = &response.error_message {
        eprintln!("Service message: {message}");
    }
    if response.depots.is_empty() {
        println!("No depots.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Depot")]);
    apply_table_style(&mut table);
    for depot in &response.depots {
        table.add_row(vec![code_cell(&depot.depot_code), Cell::new(&depot.depot_name)]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn code_cell(code: &str) -> Cell {
    Cell::new(code)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn optional_cell(value: Option<&str>) -> Cell {
    value.map_or_else(|| dim_cell("-"), Cell::new)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
