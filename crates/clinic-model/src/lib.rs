pub mod dates;
pub mod error;
pub mod ids;
pub mod preview;
pub mod record;
pub mod result;

pub use dates::{is_day_first_date, is_iso_date, normalize_date};
pub use error::{ImportError, Result};
pub use ids::EntityId;
pub use preview::{ImportPreview, ValidatedRow};
pub use record::{Field, ImportRecord};
pub use result::{CreatedCounts, ImportResult, RowError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_counts_partition_rows() {
        let rows = vec![
            ValidatedRow {
                record: ImportRecord {
                    date: "2024-12-01".to_string(),
                    procedure_name: "Consulta".to_string(),
                    doctor_name: "Dr. João".to_string(),
                    patient_name: "Maria".to_string(),
                },
                row_number: 1,
                is_valid: true,
                errors: vec![],
            },
            ValidatedRow {
                record: ImportRecord {
                    date: String::new(),
                    procedure_name: "Exame".to_string(),
                    doctor_name: "Dra. Ana".to_string(),
                    patient_name: "José".to_string(),
                },
                row_number: 2,
                is_valid: false,
                errors: vec!["Date is required".to_string()],
            },
        ];
        let preview = ImportPreview::from_rows(rows);
        assert_eq!(preview.total_rows, 2);
        assert_eq!(preview.valid_rows, 1);
        assert_eq!(preview.invalid_rows, 1);
    }

    #[test]
    fn result_serializes() {
        let result = ImportResult {
            success: 1,
            errors: vec![RowError {
                row: 3,
                message: "Missing required fields".to_string(),
            }],
            created: CreatedCounts {
                doctors: 1,
                patients: 1,
                procedure_types: 1,
                procedures: 1,
            },
            warnings: vec![],
        };
        let json = serde_json::to_string(&result).expect("serialize result");
        let round: ImportResult = serde_json::from_str(&json).expect("deserialize result");
        assert_eq!(round.success, 1);
        assert_eq!(round.errors[0].row, 3);
    }
}
