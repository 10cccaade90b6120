//! Raw form input
//!
//! [`ApplicationInput`] holds whatever the applicant typed, before any
//! checks. Every field is optional so that a partially filled form still
//! deserializes and can be reported on field by field.

use serde::{Deserialize, Serialize};

/// Age as entered: a number from structured input, or text from a form box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    /// Numeric value
    Number(f64),
    /// Unparsed text
    Text(String),
}

impl AgeInput {
    /// Coerce to a number the way a numeric form input does
    ///
    /// Blank text becomes `0`; text that is not a number becomes `NaN`.
    #[must_use]
    pub fn coerce(&self) -> f64 {
        match self {
            AgeInput::Number(n) => *n,
            AgeInput::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().unwrap_or(f64::NAN)
                }
            }
        }
    }
}

impl From<u32> for AgeInput {
    fn from(age: u32) -> Self {
        AgeInput::Number(f64::from(age))
    }
}

impl From<&str> for AgeInput {
    fn from(text: &str) -> Self {
        AgeInput::Text(text.to_string())
    }
}

/// Untrusted values collected by the registration form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationInput {
    pub full_name: Option<String>,
    pub age: Option<AgeInput>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub education: Option<String>,
    pub courses_of_interest: Vec<String>,
    pub other_course: Option<String>,
    pub knowledge_level: Option<String>,
    pub referral_source: Option<String>,
}

impl ApplicationInput {
    /// Empty input, as the form starts out
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With full name
    #[must_use]
    pub fn with_full_name(mut self, name: impl Into<String>) -> Self {
        self.full_name = Some(name.into());
        self
    }

    /// With age
    #[must_use]
    pub fn with_age(mut self, age: impl Into<AgeInput>) -> Self {
        self.age = Some(age.into());
        self
    }

    /// With WhatsApp number
    #[must_use]
    pub fn with_whatsapp(mut self, number: impl Into<String>) -> Self {
        self.whatsapp = Some(number.into());
        self
    }

    /// With e-mail address
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// With education value
    #[must_use]
    pub fn with_education(mut self, education: impl Into<String>) -> Self {
        self.education = Some(education.into());
        self
    }

    /// With one more selected course
    #[must_use]
    pub fn with_course(mut self, id: impl Into<String>) -> Self {
        self.courses_of_interest.push(id.into());
        self
    }

    /// With free-text "other" course
    #[must_use]
    pub fn with_other_course(mut self, text: impl Into<String>) -> Self {
        self.other_course = Some(text.into());
        self
    }

    /// With knowledge level value
    #[must_use]
    pub fn with_knowledge_level(mut self, level: impl Into<String>) -> Self {
        self.knowledge_level = Some(level.into());
        self
    }

    /// With referral source value
    #[must_use]
    pub fn with_referral_source(mut self, source: impl Into<String>) -> Self {
        self.referral_source = Some(source.into());
        self
    }
}
