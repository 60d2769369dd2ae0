use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use clinic_import::{ImportSession, MemoryStore, reconcile};
use clinic_ingest::{TEMPLATE_CSV, TEMPLATE_FILE_NAME, parse_records, read_import_file};
use clinic_model::{ImportPreview, ImportResult, ValidatedRow};
use clinic_validate::validate_records;

use crate::cli::{ImportArgs, PreviewArgs, TemplateArgs};
use crate::logging::redact_value;
use crate::summary::print_preview;

pub fn run_preview(args: &PreviewArgs) -> Result<ImportPreview> {
    build_preview(&args.file)
}

/// Validate the file and, on confirmation, commit its valid rows. Returns
/// `None` when the run stopped at the preview step.
pub fn run_import(args: &ImportArgs) -> Result<Option<ImportResult>> {
    let preview = build_preview(&args.file)?;
    if args.json && !args.yes {
        println!("{}", to_json(&preview)?);
    } else if !args.json {
        print_preview(&preview);
    }
    if !args.yes {
        println!();
        println!(
            "Preview only. Re-run with --yes to import the {} valid row(s).",
            preview.valid_rows
        );
        return Ok(None);
    }
    if !preview.has_valid_rows() {
        println!("No valid rows to import.");
        return Ok(None);
    }

    let valid: Vec<ValidatedRow> = preview.valid().cloned().collect();
    let mut session = ImportSession::new();
    session.load_preview(preview)?;

    let mut store = load_store(args.state.as_deref())?;
    let result = reconcile(&valid, &mut store)?;
    if let Some(path) = &args.state {
        store
            .save(path)
            .with_context(|| format!("save store state to {}", path.display()))?;
    }
    session.complete(result.clone())?;
    Ok(Some(result))
}

pub fn run_template(args: &TemplateArgs) -> Result<()> {
    match &args.output {
        Some(path) if path.as_os_str() == "-" => println!("{TEMPLATE_CSV}"),
        Some(path) => {
            fs::write(path, TEMPLATE_CSV)
                .with_context(|| format!("write template to {}", path.display()))?;
            println!("Template written to {}", path.display());
        }
        None => {
            fs::write(TEMPLATE_FILE_NAME, TEMPLATE_CSV)
                .with_context(|| format!("write template to {TEMPLATE_FILE_NAME}"))?;
            println!("Template written to {TEMPLATE_FILE_NAME}");
        }
    }
    Ok(())
}

pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serialize output")
}

fn build_preview(file: &Path) -> Result<ImportPreview> {
    let text = read_import_file(file).with_context(|| format!("read {}", file.display()))?;
    let records = parse_records(&text).context("parse import file")?;
    let preview = validate_records(&records);
    for row in preview.rows.iter().filter(|row| !row.is_valid) {
        tracing::debug!(
            row = row.row_number,
            patient = redact_value(&row.record.patient_name),
            errors = row.errors.len(),
            "invalid row"
        );
    }
    Ok(preview)
}

fn load_store(path: Option<&Path>) -> Result<MemoryStore> {
    match path {
        Some(path) if path.exists() => MemoryStore::load(path)
            .with_context(|| format!("load store state from {}", path.display())),
        _ => Ok(MemoryStore::new()),
    }
}
