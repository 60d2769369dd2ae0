//! Integration tests for the command layer.

use std::fs;
use std::path::{Path, PathBuf};

use clinic_cli::cli::{ImportArgs, PreviewArgs, TemplateArgs};
use clinic_cli::commands::{run_import, run_preview, run_template};
use clinic_import::MemoryStore;
use clinic_ingest::{TEMPLATE_CSV, parse_records};

fn write_upload(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("upload.csv");
    fs::write(&path, content).expect("write upload");
    path
}

#[test]
fn preview_reports_mixed_validity() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_upload(
        dir.path(),
        "data,nome do procedimento,nome dos medicos,nome do paciente\n\
         2024-12-01,Consulta,Dr. João,Maria\n\
         ,Exame,Dra. Ana,José",
    );

    let preview = run_preview(&PreviewArgs { file, json: false }).expect("preview");
    assert_eq!(preview.total_rows, 2);
    assert_eq!(preview.valid_rows, 1);
    assert_eq!(preview.invalid_rows, 1);
}

#[test]
fn preview_fails_on_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let args = PreviewArgs {
        file: dir.path().join("nope.csv"),
        json: false,
    };
    assert!(run_preview(&args).is_err());
}

#[test]
fn import_without_confirmation_stops_at_the_preview() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_upload(dir.path(), "data,tipo,medico,paciente\n2024-12-01,Consulta,Dr. A,B");
    let state = dir.path().join("state.json");

    let outcome = run_import(&ImportArgs {
        file,
        state: Some(state.clone()),
        yes: false,
        json: false,
    })
    .expect("import");

    assert!(outcome.is_none());
    assert!(!state.exists());
}

#[test]
fn confirmed_import_commits_and_persists_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_upload(
        dir.path(),
        "data,tipo,medico,paciente\n\
         2024-12-01,Consulta,Dr. Ana,Maria\n\
         2024-12-02,Exame, dr. ana ,José",
    );
    let state = dir.path().join("state.json");

    let args = ImportArgs {
        file,
        state: Some(state.clone()),
        yes: true,
        json: false,
    };
    let result = run_import(&args).expect("import").expect("committed");

    assert_eq!(result.success, 2);
    assert_eq!(result.created.doctors, 1);
    assert!(result.errors.is_empty());

    let store = MemoryStore::load(&state).expect("state reloads");
    assert_eq!(store.doctor_count(), 1);
    assert_eq!(store.procedures().len(), 2);

    // A second confirmed run reuses the persisted entities.
    let result = run_import(&args).expect("re-import").expect("committed");
    assert_eq!(result.success, 2);
    let store = MemoryStore::load(&state).expect("state reloads");
    assert_eq!(store.doctor_count(), 1);
    assert_eq!(store.procedures().len(), 4);
}

#[test]
fn template_command_writes_the_exact_sample_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("template.csv");

    run_template(&TemplateArgs {
        output: Some(path.clone()),
    })
    .expect("template");

    let written = fs::read_to_string(&path).expect("read template");
    assert_eq!(written, TEMPLATE_CSV);
    assert_eq!(parse_records(&written).expect("template parses").len(), 2);
}
