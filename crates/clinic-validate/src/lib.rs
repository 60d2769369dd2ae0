//! Row validation for the import pipeline.
//!
//! Validation is a pure function over the parsed records: no I/O, no state,
//! safe to re-run. Each row accumulates every problem it has rather than
//! stopping at the first, so the preview can show the user the full picture
//! before anything is committed.
//!
//! Check order per row:
//!
//! 1. Date is required
//! 2. Procedure name is required
//! 3. Doctor name is required
//! 4. Patient name is required
//! 5. Date shape must be `YYYY-MM-DD` or `DD/MM/YYYY` (only when non-empty)

use clinic_model::{
    Field, ImportPreview, ImportRecord, ValidatedRow, is_day_first_date, is_iso_date,
};

pub const DATE_FORMAT_MESSAGE: &str = "Invalid date format (use YYYY-MM-DD or DD/MM/YYYY)";

/// Message appended when `field` is empty.
pub fn required_message(field: Field) -> &'static str {
    match field {
        Field::Date => "Date is required",
        Field::ProcedureName => "Procedure name is required",
        Field::DoctorName => "Doctor name is required",
        Field::PatientName => "Patient name is required",
    }
}

/// Validate parsed records into a preview. Row numbers are 1-based positions
/// in the input sequence, not raw file line numbers (the header and skipped
/// blank lines are not counted).
pub fn validate_records(records: &[ImportRecord]) -> ImportPreview {
    let rows: Vec<ValidatedRow> = records
        .iter()
        .enumerate()
        .map(|(index, record)| validate_record(record, index + 1))
        .collect();
    let preview = ImportPreview::from_rows(rows);
    tracing::debug!(
        total = preview.total_rows,
        valid = preview.valid_rows,
        invalid = preview.invalid_rows,
        "validated import rows"
    );
    preview
}

fn validate_record(record: &ImportRecord, row_number: usize) -> ValidatedRow {
    let mut errors = Vec::new();
    for field in Field::ALL {
        if record.value(field).trim().is_empty() {
            errors.push(required_message(field).to_string());
        }
    }
    if !record.date.is_empty() && !is_iso_date(&record.date) && !is_day_first_date(&record.date) {
        errors.push(DATE_FORMAT_MESSAGE.to_string());
    }
    ValidatedRow {
        record: record.clone(),
        row_number,
        is_valid: errors.is_empty(),
        errors,
    }
}
