//! Command tests

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use enrol_cli::{command, courses, fields, log_filter, run, submit, validate, SubmitArgs, EXIT_INVALID, EXIT_OK};
use enrol_test_utils::sample_input;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn write_input(dir: &Path, name: &str, input: &enrol_schema::ApplicationInput) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string(input).unwrap()).unwrap();
    path
}

fn text(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

#[test]
fn submit_writes_document_and_prints_link() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "ana.json", &sample_input());
    let out_dir = dir.path().join("fichas");

    let mut out = Vec::new();
    let args = SubmitArgs {
        input,
        out: Some(out_dir.clone()),
        ..SubmitArgs::default()
    };
    let code = submit(&args, today(), &mut out).unwrap();
    let printed = text(out);

    assert_eq!(code, EXIT_OK);
    assert!(printed.contains("*NOVA INSCRIÇÃO - TECH_STAR ACADEMY*"));
    assert!(printed.contains("Link: https://wa.me/244952993627?text="));
    let written: Vec<_> = std::fs::read_dir(&out_dir).unwrap().collect();
    assert_eq!(written.len(), 1);
    let name = written[0].as_ref().unwrap().file_name();
    assert!(name.to_str().unwrap().starts_with("ficha-inscricao-"));
}

#[test]
fn submit_json_summary() {
    let dir = tempfile::tempdir().unwrap();
    let args = SubmitArgs {
        input: write_input(dir.path(), "ana.json", &sample_input()),
        out: Some(dir.path().to_path_buf()),
        json: true,
        ..SubmitArgs::default()
    };

    let mut out = Vec::new();
    assert_eq!(submit(&args, today(), &mut out).unwrap(), EXIT_OK);
    let summary: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(summary["record"]["fullName"], "Ana Silva");
    assert_eq!(summary["reference"].as_str().unwrap().len(), 64);
    assert!(summary["fileName"].as_str().unwrap().ends_with(".pdf"));
    assert!(Path::new(summary["path"].as_str().unwrap()).exists());
}

#[test]
fn submit_preview_shows_layout() {
    let dir = tempfile::tempdir().unwrap();
    let args = SubmitArgs {
        input: write_input(dir.path(), "ana.json", &sample_input()),
        out: Some(dir.path().to_path_buf()),
        preview: true,
        ..SubmitArgs::default()
    };

    let mut out = Vec::new();
    submit(&args, today(), &mut out).unwrap();
    assert!(text(out).contains("Formulário preenchido em: 19/10/2026"));
}

#[test]
fn invalid_application_exits_one_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut input = sample_input();
    input.full_name = None;
    input.age = None;
    let out_dir = dir.path().join("fichas");
    let args = SubmitArgs {
        input: write_input(dir.path(), "bad.json", &input),
        out: Some(out_dir.clone()),
        ..SubmitArgs::default()
    };

    let mut out = Vec::new();
    let code = submit(&args, today(), &mut out).unwrap();
    let printed = text(out);

    assert_eq!(code, EXIT_INVALID);
    assert!(printed.starts_with("Invalid application (2 field(s)):"));
    assert!(printed.contains("  - fullName"));
    assert!(printed.contains("  - age"));
    assert!(!out_dir.exists());
}

#[test]
fn unsupported_input_is_user_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ana.txt");
    std::fs::write(&path, "x").unwrap();

    let mut out = Vec::new();
    assert_eq!(validate(&path, None, &mut out).unwrap(), EXIT_INVALID);
    assert!(text(out).starts_with("Invalid input:"));
}

#[test]
fn broken_config_is_system_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("enrol.toml");
    std::fs::write(&config, "[handoff]\nrecipient = \"12\"\n").unwrap();
    let input = write_input(dir.path(), "ana.json", &sample_input());

    let mut out = Vec::new();
    assert!(validate(&input, Some(config.as_path()), &mut out).is_err());
}

#[test]
fn validate_accepts_sample() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "ana.json", &sample_input());

    let mut out = Vec::new();
    assert_eq!(validate(&input, None, &mut out).unwrap(), EXIT_OK);
    assert_eq!(text(out), "Valid application: Ana Silva\n");
}

#[test]
fn courses_lists_catalogue() {
    let mut out = Vec::new();
    courses(None, &mut out).unwrap();
    let printed = text(out);

    assert_eq!(printed.lines().count(), 7);
    assert!(printed.lines().any(|l| l.starts_with("logic") && l.ends_with("Lógica de Programação")));
}

#[test]
fn fields_lists_rules() {
    let mut out = Vec::new();
    fields(None, &mut out).unwrap();
    let printed = text(out);

    assert!(printed.contains("email"));
    assert!(printed.contains("[optional]"));
    assert!(printed.contains("Formato inválido. Use: 9xx xxx xxx"));
}

#[test]
fn run_dispatches_parsed_arguments() {
    let matches = command().try_get_matches_from(["enrol", "-v", "courses"]).unwrap();
    assert_eq!(matches.get_count("verbose"), 1);

    let mut out = Vec::new();
    assert_eq!(run(&matches, today(), &mut out).unwrap(), EXIT_OK);
    assert!(!out.is_empty());
}

#[test]
fn submit_requires_input() {
    assert!(command().try_get_matches_from(["enrol", "submit"]).is_err());
}

#[test]
fn verbosity_maps_to_filter() {
    assert_eq!(log_filter(0), "warn");
    assert_eq!(log_filter(1), "info");
    assert_eq!(log_filter(3), "debug");
}
