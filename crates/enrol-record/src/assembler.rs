//! Data assembler
//!
//! Maps a [`ValidatedApplication`] to a [`RegistrationRecord`]: enum choices
//! become their stored values and course identifiers become labels.

use enrol_schema::{Choice, CourseCatalog, ValidatedApplication, OTHER_COURSE_ID};

use crate::record::RegistrationRecord;

/// Label used when "other" is selected without free text
pub const UNSPECIFIED_OTHER_COURSE: &str = "Outro curso não especificado";

/// Builds records against a course catalogue
#[derive(Debug, Clone)]
pub struct Assembler {
    catalog: CourseCatalog,
}

impl Assembler {
    /// Create an assembler for a catalogue
    #[inline]
    #[must_use]
    pub fn new(catalog: CourseCatalog) -> Self {
        Self { catalog }
    }

    /// Catalogue used to resolve labels
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    /// Assemble the normalized record
    #[must_use]
    pub fn assemble(&self, application: &ValidatedApplication) -> RegistrationRecord {
        let courses_of_interest = application
            .courses()
            .iter()
            .map(|id| self.course_label(id, application))
            .collect();

        RegistrationRecord {
            full_name: application.full_name().to_string(),
            age: application.age(),
            whatsapp: application.whatsapp().to_string(),
            email: application.email().unwrap_or_default().to_string(),
            education: application.education().as_str().to_string(),
            courses_of_interest,
            knowledge_level: application.knowledge_level().as_str().to_string(),
            referral_source: application.referral_source().as_str().to_string(),
        }
    }

    fn course_label(&self, id: &str, application: &ValidatedApplication) -> String {
        if id == OTHER_COURSE_ID {
            return application
                .other_course()
                .unwrap_or(UNSPECIFIED_OTHER_COURSE)
                .to_string();
        }
        // unknown ids pass through unchanged
        self.catalog.label_of(id).unwrap_or(id).to_string()
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new(CourseCatalog::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enrol_schema::{ApplicationInput, Schema, SchemaConfig};
    use pretty_assertions::assert_eq;

    fn input() -> ApplicationInput {
        ApplicationInput::new()
            .with_full_name("Ana Silva")
            .with_age(17u32)
            .with_whatsapp("923 456 789")
            .with_education("técnico")
            .with_course("programming")
            .with_course("electronics")
            .with_knowledge_level("Iniciante")
            .with_referral_source("redes sociais")
    }

    #[test]
    fn resolves_labels_in_selection_order() {
        let validated = Schema::default().validate(&input()).unwrap();
        let record = Assembler::default().assemble(&validated);

        assert_eq!(
            record.courses_of_interest,
            vec!["Programação Iniciante", "Eletrônica Básica"]
        );
        assert_eq!(record.education, "técnico");
        assert_eq!(record.referral_source, "redes sociais");
        assert_eq!(record.email, "");
    }

    #[test]
    fn other_course_uses_free_text() {
        let validated = Schema::default()
            .validate(&input().with_course("other").with_other_course("Robótica"))
            .unwrap();
        let record = Assembler::default().assemble(&validated);
        assert_eq!(record.courses_of_interest.last().map(String::as_str), Some("Robótica"));
    }

    #[test]
    fn other_course_placeholder_when_unspecified() {
        let schema = Schema::new(
            SchemaConfig {
                require_other_course: false,
                ..SchemaConfig::default()
            },
            CourseCatalog::default(),
        );
        let validated = schema.validate(&input().with_course("other")).unwrap();
        let record = Assembler::default().assemble(&validated);
        assert_eq!(
            record.courses_of_interest.last().map(String::as_str),
            Some(UNSPECIFIED_OTHER_COURSE)
        );
    }
}
