use serde::{Deserialize, Serialize};

use crate::record::ImportRecord;

/// A parsed row together with its validation outcome. Never mutated after
/// validation; a bad row is fixed by re-uploading a corrected file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedRow {
    #[serde(flatten)]
    pub record: ImportRecord,
    /// 1-based position within the data rows (header and blank lines excluded).
    pub row_number: usize,
    pub is_valid: bool,
    /// Messages in check order. Empty iff `is_valid`.
    pub errors: Vec<String>,
}

/// Validation outcome for a whole upload, surfaced to the user before any
/// data is committed. Invariant: `total_rows == valid_rows + invalid_rows`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportPreview {
    pub total_rows: usize,
    pub valid_rows: usize,
    pub invalid_rows: usize,
    pub rows: Vec<ValidatedRow>,
}

impl ImportPreview {
    pub fn from_rows(rows: Vec<ValidatedRow>) -> Self {
        let valid_rows = rows.iter().filter(|row| row.is_valid).count();
        Self {
            total_rows: rows.len(),
            valid_rows,
            invalid_rows: rows.len() - valid_rows,
            rows,
        }
    }

    /// Rows eligible for commit.
    pub fn valid(&self) -> impl Iterator<Item = &ValidatedRow> {
        self.rows.iter().filter(|row| row.is_valid)
    }

    pub fn has_valid_rows(&self) -> bool {
        self.valid_rows > 0
    }
}
