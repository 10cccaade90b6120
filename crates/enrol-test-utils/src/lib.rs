//! Testing utilities for the enrolment workspace
//!
//! Shared fixtures for applications and records.

#![allow(missing_docs)]

use enrol_record::{Assembler, RegistrationRecord};
use enrol_schema::{ApplicationInput, Schema};

/// A complete, valid application
pub fn sample_input() -> ApplicationInput {
    ApplicationInput::new()
        .with_full_name("Ana Silva")
        .with_age("17")
        .with_whatsapp("923 456 789")
        .with_email("ana.silva@example.ao")
        .with_education("médio")
        .with_course("logic")
        .with_course("ai")
        .with_knowledge_level("Iniciante")
        .with_referral_source("redes sociais")
}

/// Same applicant without an e-mail
pub fn sample_input_without_email() -> ApplicationInput {
    let mut input = sample_input();
    input.email = Some(String::new());
    input
}

/// Record assembled from [`sample_input`] with the default schema
pub fn sample_record() -> RegistrationRecord {
    record_from(&sample_input())
}

/// Validate and assemble with the defaults, panicking on invalid input
pub fn record_from(input: &ApplicationInput) -> RegistrationRecord {
    let validated = Schema::default()
        .validate(input)
        .expect("fixture input should validate");
    Assembler::default().assemble(&validated)
}

/// Record with `count` synthetic course labels
pub fn record_with_courses(count: usize) -> RegistrationRecord {
    let mut record = sample_record();
    record.courses_of_interest = (1..=count).map(|i| format!("Curso {i}")).collect();
    record
}
