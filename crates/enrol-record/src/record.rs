//! Normalized registration record
//!
//! The record is what both outputs consume: every value is already in its
//! display form, so renderers never consult the schema or the catalogue.

use serde::{Deserialize, Serialize};

use crate::reference::SubmissionRef;
use crate::RecordError;

/// Placeholder shown when no e-mail was given
pub const EMAIL_NOT_PROVIDED: &str = "Não fornecido";

/// Display-ready registration data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    /// Full name
    pub full_name: String,
    /// Age in years
    pub age: u32,
    /// WhatsApp number as entered
    pub whatsapp: String,
    /// E-mail, empty when not supplied
    pub email: String,
    /// Education value
    pub education: String,
    /// Course labels in selection order
    pub courses_of_interest: Vec<String>,
    /// Knowledge level value
    pub knowledge_level: String,
    /// Referral source value
    pub referral_source: String,
}

impl RegistrationRecord {
    /// Whether an e-mail was supplied
    #[inline]
    #[must_use]
    pub fn has_email(&self) -> bool {
        !self.email.is_empty()
    }

    /// E-mail, or `fallback` when none was supplied
    #[inline]
    #[must_use]
    pub fn email_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.has_email() {
            &self.email
        } else {
            fallback
        }
    }

    /// Content reference of this record
    ///
    /// # Errors
    /// Returns error if the record cannot be serialized
    pub fn reference(&self) -> Result<SubmissionRef, RecordError> {
        let canonical = serde_json::to_vec(self).map_err(RecordError::Serialization)?;
        Ok(SubmissionRef::compute(&canonical))
    }

    /// Pretty JSON form
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json(&self) -> Result<String, RecordError> {
        serde_json::to_string_pretty(self).map_err(RecordError::Serialization)
    }
}
