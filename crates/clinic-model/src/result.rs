use serde::{Deserialize, Serialize};

/// A row that passed validation but failed during reconciliation, keyed by
/// its original preview row number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    pub row: usize,
    pub message: String,
}

/// Distinct entities touched by a committed batch, per kind.
///
/// These are batch-distinct name counts, not strict newly-created counts: a
/// doctor that already existed in the store still counts once here. Surfaced
/// to the user as an approximation alongside the auto-create warnings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedCounts {
    pub doctors: usize,
    pub patients: usize,
    pub procedure_types: usize,
    pub procedures: usize,
}

/// Terminal artifact of a committed import. Immutable once returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
    /// Procedures actually created.
    pub success: usize,
    pub errors: Vec<RowError>,
    pub created: CreatedCounts,
    pub warnings: Vec<String>,
}

impl ImportResult {
    pub fn has_row_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
