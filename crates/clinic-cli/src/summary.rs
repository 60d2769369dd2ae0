use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use clinic_model::{ImportPreview, ImportResult};

pub fn print_preview(preview: &ImportPreview) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Date"),
        header_cell("Procedure"),
        header_cell("Doctor"),
        header_cell("Patient"),
        header_cell("Status"),
        header_cell("Errors"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);
    for row in &preview.rows {
        table.add_row(vec![
            Cell::new(row.row_number),
            text_cell(&row.record.date),
            text_cell(&row.record.procedure_name),
            text_cell(&row.record.doctor_name),
            text_cell(&row.record.patient_name),
            status_cell(row.is_valid),
            errors_cell(&row.errors),
        ]);
    }
    println!("{table}");
    println!(
        "{} row(s): {} valid, {} invalid",
        preview.total_rows, preview.valid_rows, preview.invalid_rows
    );
}

pub fn print_result(result: &ImportResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Entities touched"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Procedures"), Cell::new(result.created.procedures)]);
    table.add_row(vec![
        Cell::new("Procedure types"),
        Cell::new(result.created.procedure_types),
    ]);
    table.add_row(vec![Cell::new("Doctors"), Cell::new(result.created.doctors)]);
    table.add_row(vec![Cell::new("Patients"), Cell::new(result.created.patients)]);
    println!("{table}");
    println!("Imported {} procedure(s).", result.success);
    if !result.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &result.warnings {
            println!("- {warning}");
        }
    }
    if !result.errors.is_empty() {
        eprintln!();
        eprintln!("Row errors:");
        for error in &result.errors {
            eprintln!("- row {}: {}", error.row, error.message);
        }
    }
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

fn status_cell(is_valid: bool) -> Cell {
    if is_valid {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("✗").fg(Color::Red).add_attribute(Attribute::Bold)
    }
}

fn errors_cell(errors: &[String]) -> Cell {
    if errors.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(errors.join("; ")).fg(Color::Red)
    }
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
