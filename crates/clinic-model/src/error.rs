use thiserror::Error;

use crate::record::Field;

/// Pipeline-level failures. Row-level problems are accumulated on the row
/// itself (`ValidatedRow::errors`, `ImportResult::errors`), never raised here.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("file is not valid UTF-8 text")]
    InvalidEncoding,
    #[error("CSV is empty or has no data rows")]
    EmptyFile,
    #[error("malformed CSV: {0}")]
    MalformedCsv(String),
    #[error("columns not found in CSV: {}", join_fields(.0))]
    MissingColumns(Vec<Field>),
    #[error("record store unavailable: {0}")]
    StoreUnavailable(String),
}

pub type Result<T> = std::result::Result<T, ImportError>;

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::column_name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_names_each_field() {
        let error = ImportError::MissingColumns(vec![Field::Date, Field::PatientName]);
        let message = error.to_string();
        assert!(message.contains("data"));
        assert!(message.contains("nome do paciente"));
    }
}
