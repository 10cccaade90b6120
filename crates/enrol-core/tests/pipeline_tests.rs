//! Submission pipeline tests

use chrono::NaiveDate;
use enrol_core::{load_input, ConfigError, EnrolConfig, EnrolError, FormState, Registrar};
use enrol_schema::{Field, OTHER_COURSE_ID};
use enrol_test_utils::sample_input;
use pretty_assertions::assert_eq;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn registrar() -> Registrar {
    Registrar::new(EnrolConfig::default()).unwrap()
}

#[test]
fn submit_produces_every_artifact() {
    let submission = registrar().submit(&sample_input(), today()).unwrap();

    assert_eq!(submission.record.full_name, "Ana Silva");
    assert_eq!(submission.reference, submission.record.reference().unwrap());
    assert_eq!(
        submission.document.file_name,
        format!("ficha-inscricao-{}.pdf", submission.reference.short())
    );
    assert_eq!(submission.document.media_type, "application/pdf");
    assert!(submission.document.bytes.starts_with(b"%PDF-1.4"));
    assert!(submission.handoff.message.contains("*Nome:* Ana Silva"));
    assert!(submission
        .handoff
        .link
        .as_str()
        .starts_with("https://wa.me/244952993627?text="));
}

#[test]
fn same_input_same_reference() {
    let registrar = registrar();
    let a = registrar.submit(&sample_input(), today()).unwrap();
    let b = registrar.submit(&sample_input(), today()).unwrap();
    assert_eq!(a.reference, b.reference);
    assert_eq!(a.document, b.document);
}

#[test]
fn invalid_input_lists_every_field() {
    let mut input = sample_input();
    input.full_name = Some("Al".to_string());
    input.whatsapp = Some("823456789".to_string());

    let err = registrar().submit(&input, today()).unwrap_err();
    assert!(err.is_user_error());
    let errors = err.validation_errors().unwrap();
    assert_eq!(errors.fields(), vec![Field::FullName, Field::Whatsapp]);
}

#[test]
fn preview_carries_formatted_date() {
    let registrar = registrar();
    let record = registrar.record(&sample_input()).unwrap();
    let preview = registrar.preview(&record, today()).unwrap();
    assert!(preview.contains("Formulário preenchido em: 19/10/2026"));
}

#[test]
fn date_format_is_configurable() {
    let mut config = EnrolConfig::default();
    config.document.date_format = "%Y-%m-%d".to_string();
    let registrar = Registrar::new(config).unwrap();
    let record = registrar.record(&sample_input()).unwrap();

    let document = registrar.layout(&record, today()).unwrap();
    assert!(document.contains_text("Formulário preenchido em: 2026-10-19"));
}

#[test]
fn submit_form_resets_only_on_success() {
    let registrar = registrar();
    let mut form = FormState::from_input(sample_input());
    form.toggle_course(OTHER_COURSE_ID, true);

    // "other" checked without its text
    let err = registrar.submit_form(&mut form, today()).unwrap_err();
    assert!(err.is_user_error());
    assert!(form.is_other_visible());
    assert_eq!(form.input().full_name.as_deref(), Some("Ana Silva"));

    form.input_mut().other_course = Some("Robótica".to_string());
    let submission = registrar.submit_form(&mut form, today()).unwrap();
    assert!(submission.record.courses_of_interest.contains(&"Robótica".to_string()));
    assert_eq!(form, FormState::new());
}

#[test]
fn custom_catalogue_from_config() {
    let config = EnrolConfig::from_toml_str(
        r#"
[academy]
name = "ACME ACADEMY"

[[courses]]
id = "robotics"
label = "Robótica"
"#,
    )
    .unwrap();
    let registrar = Registrar::new(config).unwrap();

    let mut input = sample_input();
    input.courses_of_interest = vec!["robotics".to_string()];
    let submission = registrar.submit(&input, today()).unwrap();
    assert_eq!(submission.record.courses_of_interest, vec!["Robótica".to_string()]);
    assert!(submission.handoff.message.starts_with("*NOVA INSCRIÇÃO - ACME ACADEMY*"));

    // "logic" is not offered here
    let err = registrar.submit(&sample_input(), today()).unwrap_err();
    assert!(err.validation_errors().unwrap().has(Field::CoursesOfInterest));
}

#[test]
fn time_of_day_date_format_refused_up_front() {
    let config = EnrolConfig::from_toml_str("[document]\ndate_format = \"%d/%m/%Y %H:%M\"\n").unwrap();
    let err = Registrar::new(config).unwrap_err();
    assert!(matches!(err, EnrolError::Config(ConfigError::DateFormat(_))));
}

#[test]
fn bad_config_is_a_system_error() {
    let mut config = EnrolConfig::default();
    config.handoff.recipient = "abc".to_string();
    let err = Registrar::new(config).unwrap_err();
    assert!(matches!(err, EnrolError::Config(_)));
    assert!(!err.is_user_error());
}

#[test]
fn document_written_to_directory() {
    let dir = tempfile::tempdir().unwrap();
    let submission = registrar().submit(&sample_input(), today()).unwrap();

    let path = submission.document.write_to(&dir.path().join("out")).unwrap();
    assert_eq!(path.file_name().unwrap().to_str().unwrap(), submission.document.file_name);
    assert_eq!(std::fs::read(&path).unwrap(), submission.document.bytes);
}

#[test]
fn load_input_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("ana.json");
    std::fs::write(&json, serde_json::to_string(&sample_input()).unwrap()).unwrap();
    let yaml = dir.path().join("ana.yml");
    std::fs::write(&yaml, serde_yaml::to_string(&sample_input()).unwrap()).unwrap();

    assert_eq!(load_input(&json).unwrap(), sample_input());
    assert_eq!(load_input(&yaml).unwrap(), sample_input());
}

#[test]
fn load_input_rejects_unknown_and_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let txt = dir.path().join("ana.txt");
    std::fs::write(&txt, "fullName: Ana").unwrap();
    let broken = dir.path().join("ana.json");
    std::fs::write(&broken, "{ not json").unwrap();

    let unknown = load_input(&txt).unwrap_err();
    assert!(matches!(unknown, EnrolError::UnsupportedInput { .. }));
    assert!(unknown.is_user_error());
    assert!(matches!(load_input(&broken).unwrap_err(), EnrolError::InputDecode { .. }));
    assert!(matches!(
        load_input(&dir.path().join("missing.json")).unwrap_err(),
        EnrolError::Io { .. }
    ));
}

#[test]
fn config_loaded_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("enrol.toml");
    std::fs::write(&path, "[schema]\nmin_age = 12\n").unwrap();

    let config = EnrolConfig::load(&path).unwrap();
    assert_eq!(config.schema.min_age, 12);
    assert_eq!(config.courses.len(), 7);
}
