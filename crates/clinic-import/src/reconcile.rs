//! Batch reconciliation of validated rows against the record store.
//!
//! For each valid row the reconciler resolves or creates, in order, the
//! procedure type, the doctor, and the patient by normalized name, then
//! creates one procedure record linking the three. Rows are independent: one
//! row failing never aborts the rest of the batch, and the result is a full
//! accounting of what happened, not a short-circuit.

use std::collections::BTreeSet;

use clinic_model::{CreatedCounts, ImportError, ImportResult, Result, RowError, ValidatedRow};

use crate::normalize::normalize_name;
use crate::store::{NewProcedure, RecordStore, StoreError};

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

const WARNING_AUTO_CREATE: &str =
    "Doctors and patients were created automatically when not already known";
const WARNING_DEFAULT_VALUES: &str =
    "New procedure types were created with default reference values";

/// Commit the valid subset of a preview.
///
/// Callers pass the rows already filtered on `is_valid`; required fields are
/// re-checked here defensively all the same. The `created` counts report
/// distinct normalized names touched by the rows that completed, whether the
/// entity pre-existed or was newly made.
///
/// # Errors
///
/// Only `StoreUnavailable` aborts the operation; every other failure is
/// recorded per row inside the returned result.
pub fn reconcile(rows: &[ValidatedRow], store: &mut dyn RecordStore) -> Result<ImportResult> {
    let mut success = 0usize;
    let mut errors: Vec<RowError> = Vec::new();
    let mut doctors: BTreeSet<String> = BTreeSet::new();
    let mut patients: BTreeSet<String> = BTreeSet::new();
    let mut procedure_types: BTreeSet<String> = BTreeSet::new();

    for row in rows {
        if !row.record.is_complete() {
            tracing::warn!(row = row.row_number, "row skipped: required fields missing");
            errors.push(RowError {
                row: row.row_number,
                message: MISSING_FIELDS_MESSAGE.to_string(),
            });
            continue;
        }
        match reconcile_row(row, store) {
            Ok(()) => {
                success += 1;
                procedure_types.insert(normalize_name(&row.record.procedure_name));
                doctors.insert(normalize_name(&row.record.doctor_name));
                patients.insert(normalize_name(&row.record.patient_name));
            }
            Err(StoreError::Rejected(message)) => {
                tracing::warn!(row = row.row_number, %message, "row rejected by store");
                errors.push(RowError {
                    row: row.row_number,
                    message,
                });
            }
            Err(StoreError::Unavailable(message)) => {
                return Err(ImportError::StoreUnavailable(message));
            }
        }
    }

    tracing::info!(
        imported = success,
        failed = errors.len(),
        "import batch committed"
    );
    Ok(ImportResult {
        success,
        errors,
        created: CreatedCounts {
            doctors: doctors.len(),
            patients: patients.len(),
            procedure_types: procedure_types.len(),
            procedures: success,
        },
        warnings: vec![
            WARNING_AUTO_CREATE.to_string(),
            WARNING_DEFAULT_VALUES.to_string(),
        ],
    })
}

fn reconcile_row(row: &ValidatedRow, store: &mut dyn RecordStore) -> std::result::Result<(), StoreError> {
    let record = &row.record;
    let procedure_type = store.find_or_create_procedure_type(&record.procedure_name)?;
    let doctor = store.find_or_create_doctor(&record.doctor_name)?;
    let patient = store.find_or_create_patient(&record.patient_name)?;
    store.create_procedure(NewProcedure {
        procedure_type,
        doctor,
        patient,
        date: record.date.clone(),
        value: None,
    })?;
    tracing::debug!(row = row.row_number, "row imported");
    Ok(())
}
