use std::fmt;

use serde::{Deserialize, Serialize};

/// The four canonical columns every import file must provide, in the order
/// they are reported and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    Date,
    ProcedureName,
    DoctorName,
    PatientName,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Date,
        Field::ProcedureName,
        Field::DoctorName,
        Field::PatientName,
    ];

    /// Primary column name, as it appears in the downloadable template.
    pub fn column_name(&self) -> &'static str {
        match self {
            Field::Date => "data",
            Field::ProcedureName => "nome do procedimento",
            Field::DoctorName => "nome dos medicos",
            Field::PatientName => "nome do paciente",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// One row extracted from an uploaded file, prior to validation. All values
/// are trimmed free text; the date is normalized to `YYYY-MM-DD` when the
/// cell matched a recognized input form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRecord {
    pub date: String,
    pub procedure_name: String,
    pub doctor_name: String,
    pub patient_name: String,
}

impl ImportRecord {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::ProcedureName => &self.procedure_name,
            Field::DoctorName => &self.doctor_name,
            Field::PatientName => &self.patient_name,
        }
    }

    /// Canonical fields whose value is empty, in `Field::ALL` order.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
