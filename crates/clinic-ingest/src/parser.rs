//! CSV parsing for procedure import files.
//!
//! Input files come from spreadsheet exports with no consistent dialect: the
//! delimiter may be a tab, semicolon, or comma, headers appear in any order
//! under several accepted names, and dates arrive as either `YYYY-MM-DD` or
//! `DD/MM/YYYY`. The parser resolves all of that up front so later stages
//! only ever see canonical records.

use clinic_model::{Field, ImportError, ImportRecord, Result, normalize_date};
use csv::ReaderBuilder;

/// Accepted cell delimiters, detected once per file from the header line.
/// Priority is fixed (tab, then semicolon, then comma) so a field value that
/// happens to contain a comma cannot flip the detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Semicolon,
    Comma,
}

impl Delimiter {
    pub fn detect(header_line: &str) -> Self {
        if header_line.contains('\t') {
            Delimiter::Tab
        } else if header_line.contains(';') {
            Delimiter::Semicolon
        } else {
            Delimiter::Comma
        }
    }

    pub const fn as_byte(self) -> u8 {
        match self {
            Delimiter::Tab => b'\t',
            Delimiter::Semicolon => b';',
            Delimiter::Comma => b',',
        }
    }
}

/// Recognized header spellings, lower-cased. Unknown headers are ignored so
/// exports with extra columns still import.
fn field_for_header(header: &str) -> Option<Field> {
    match header {
        "data" => Some(Field::Date),
        "nome do procedimento" | "procedimento" | "tipo" => Some(Field::ProcedureName),
        "nome dos medicos" | "medico" | "médico" => Some(Field::DoctorName),
        "nome do paciente" | "paciente" => Some(Field::PatientName),
        _ => None,
    }
}

#[derive(Debug, Default)]
struct ColumnMap {
    date: Option<usize>,
    procedure_name: Option<usize>,
    doctor_name: Option<usize>,
    patient_name: Option<usize>,
}

impl ColumnMap {
    fn resolve(header: &[String]) -> Result<Self> {
        let mut map = Self::default();
        for (index, raw) in header.iter().enumerate() {
            match field_for_header(&raw.to_lowercase()) {
                Some(Field::Date) => map.date = Some(index),
                Some(Field::ProcedureName) => map.procedure_name = Some(index),
                Some(Field::DoctorName) => map.doctor_name = Some(index),
                Some(Field::PatientName) => map.patient_name = Some(index),
                None => {}
            }
        }
        let missing: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| map.index(*field).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ImportError::MissingColumns(missing));
        }
        Ok(map)
    }

    fn index(&self, field: Field) -> Option<usize> {
        match field {
            Field::Date => self.date,
            Field::ProcedureName => self.procedure_name,
            Field::DoctorName => self.doctor_name,
            Field::PatientName => self.patient_name,
        }
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Parse decoded import text into canonical records.
///
/// The first non-empty line is the header; blank lines are skipped and never
/// counted as rows. Short rows are padded with empty values rather than
/// rejected, so missing data is reported per-row by validation instead of
/// killing the whole file.
///
/// # Errors
///
/// `EmptyFile` when no data rows exist, `MissingColumns` naming each
/// canonical field that found no header match.
pub fn parse_records(text: &str) -> Result<Vec<ImportRecord>> {
    let header_line = text
        .lines()
        .find(|line| !line.trim().is_empty())
        .ok_or(ImportError::EmptyFile)?;
    let delimiter = Delimiter::detect(header_line);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|error| ImportError::MalformedCsv(error.to_string()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        rows.push(row);
    }
    if rows.len() < 2 {
        return Err(ImportError::EmptyFile);
    }

    let columns = ColumnMap::resolve(&rows[0])?;
    let cell = |row: &[String], field: Field| -> String {
        columns
            .index(field)
            .and_then(|index| row.get(index))
            .cloned()
            .unwrap_or_default()
    };

    let records: Vec<ImportRecord> = rows[1..]
        .iter()
        .map(|row| ImportRecord {
            date: normalize_date(&cell(row, Field::Date)),
            procedure_name: cell(row, Field::ProcedureName),
            doctor_name: cell(row, Field::DoctorName),
            patient_name: cell(row, Field::PatientName),
        })
        .collect();
    tracing::debug!(
        delimiter = ?delimiter,
        rows = records.len(),
        "parsed import file"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_priority_is_tab_semicolon_comma() {
        assert_eq!(Delimiter::detect("a\tb;c,d"), Delimiter::Tab);
        assert_eq!(Delimiter::detect("a;b,c"), Delimiter::Semicolon);
        assert_eq!(Delimiter::detect("a,b"), Delimiter::Comma);
        assert_eq!(Delimiter::detect("single"), Delimiter::Comma);
    }

    #[test]
    fn parses_template_shaped_file() {
        let text = "data,nome do procedimento,nome dos medicos,nome do paciente\n\
                    2024-12-01,Consulta,Dr. João,Maria\n\
                    15/03/2024,Exame,Dra. Ana,José";
        let records = parse_records(text).expect("parse");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, "2024-12-01");
        assert_eq!(records[1].date, "2024-03-15");
        assert_eq!(records[1].patient_name, "José");
    }

    #[test]
    fn accepts_semicolon_and_tab_files() {
        let semicolon = "data;tipo;medico;paciente\n01/02/2024;Consulta;Dr. A;B";
        let records = parse_records(semicolon).expect("parse semicolon");
        assert_eq!(records[0].date, "2024-02-01");

        let tab = "data\ttipo\tmedico\tpaciente\n2024-02-01\tConsulta\tDr. A\tB";
        let records = parse_records(tab).expect("parse tab");
        assert_eq!(records[0].doctor_name, "Dr. A");
    }

    #[test]
    fn ignores_unknown_columns_and_reordering() {
        let text = "paciente,observacao,data,tipo,medico\n\
                    Maria,ignored,2024-12-01,Consulta,Dr. João";
        let records = parse_records(text).expect("parse");
        assert_eq!(records[0].patient_name, "Maria");
        assert_eq!(records[0].procedure_name, "Consulta");
        assert_eq!(records[0].doctor_name, "Dr. João");
    }

    #[test]
    fn short_rows_default_to_empty_values() {
        let text = "data,tipo,medico,paciente\n2024-12-01,Consulta";
        let records = parse_records(text).expect("parse");
        assert_eq!(records[0].doctor_name, "");
        assert_eq!(records[0].patient_name, "");
    }

    #[test]
    fn blank_lines_are_not_rows() {
        let text = "\n\ndata,tipo,medico,paciente\n\n2024-12-01,Consulta,Dr. A,B\n\n";
        let records = parse_records(text).expect("parse");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn missing_columns_are_named() {
        let text = "data,tipo,medico\n2024-12-01,Consulta,Dr. A";
        let error = parse_records(text).unwrap_err();
        let ImportError::MissingColumns(fields) = error else {
            panic!("expected MissingColumns");
        };
        assert_eq!(fields, vec![Field::PatientName]);
    }

    #[test]
    fn empty_input_fails() {
        assert!(matches!(parse_records(""), Err(ImportError::EmptyFile)));
        assert!(matches!(
            parse_records("data,tipo,medico,paciente\n"),
            Err(ImportError::EmptyFile)
        ));
    }

    #[test]
    fn unrecognized_date_shapes_pass_through() {
        let text = "data,tipo,medico,paciente\n01.02.2024,Consulta,Dr. A,B";
        let records = parse_records(text).expect("parse");
        assert_eq!(records[0].date, "01.02.2024");
    }

    #[test]
    fn parsing_is_idempotent() {
        let text = "data,tipo,medico,paciente\n15/03/2024,Consulta,Dr. A,B";
        let first = parse_records(text).expect("first parse");
        let second = parse_records(text).expect("second parse");
        assert_eq!(first, second);
    }
}
