//! Form field identifiers
//!
//! Every input the registration form collects is named by a [`Field`].
//! The wire key is the camelCase name used by input files; the label is
//! what the applicant sees next to the input.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// A field of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Applicant's full name
    FullName,
    /// Age in whole years
    Age,
    /// WhatsApp phone number
    Whatsapp,
    /// Optional e-mail address
    Email,
    /// Highest schooling level
    Education,
    /// Selected course identifiers
    CoursesOfInterest,
    /// Free text describing the "other" course
    OtherCourse,
    /// Self-assessed knowledge level
    KnowledgeLevel,
    /// How the applicant heard about the program
    ReferralSource,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 9] = [
        Field::FullName,
        Field::Age,
        Field::Whatsapp,
        Field::Email,
        Field::Education,
        Field::CoursesOfInterest,
        Field::OtherCourse,
        Field::KnowledgeLevel,
        Field::ReferralSource,
    ];

    /// Key used in serialized input
    #[inline]
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Age => "age",
            Field::Whatsapp => "whatsapp",
            Field::Email => "email",
            Field::Education => "education",
            Field::CoursesOfInterest => "coursesOfInterest",
            Field::OtherCourse => "otherCourse",
            Field::KnowledgeLevel => "knowledgeLevel",
            Field::ReferralSource => "referralSource",
        }
    }

    /// Label shown on the form
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Field::FullName => "Nome completo",
            Field::Age => "Idade",
            Field::Whatsapp => "Número do WhatsApp",
            Field::Email => "Email",
            Field::Education => "Escolaridade",
            Field::CoursesOfInterest => "Curso(s) de interesse",
            Field::OtherCourse => "Outro curso",
            Field::KnowledgeLevel => "Nível de conhecimento",
            Field::ReferralSource => "Como soube de nós",
        }
    }

    /// Whether the form marks this field as mandatory
    #[inline]
    #[must_use]
    pub const fn is_mandatory(self) -> bool {
        !matches!(self, Field::Email | Field::OtherCourse)
    }

    /// Look a field up by its wire key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.key()), Some(field));
        }
        assert_eq!(Field::from_key("nickname"), None);
    }

    #[test]
    fn optional_fields() {
        assert!(!Field::Email.is_mandatory());
        assert!(!Field::OtherCourse.is_mandatory());
        assert!(Field::FullName.is_mandatory());
    }
}
