//! Validation error types
//!
//! A failed validation reports every failing field at once, each with the
//! message the form shows under that input.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::field::Field;
use crate::rules::RuleKind;

/// One failing field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field that failed
    pub field: Field,
    /// Rule that rejected the value
    pub rule: RuleKind,
    /// Message for the applicant
    pub message: String,
}

impl FieldError {
    /// Create a field error
    pub fn new(field: Field, rule: RuleKind, message: impl Into<String>) -> Self {
        Self {
            field,
            rule,
            message: message.into(),
        }
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field errors from one validation pass, in form order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub(crate) fn from_vec(mut errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }
        errors.sort_by_key(|e| e.field);
        Some(Self { errors })
    }

    pub(crate) fn single(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Error for a given field, if it failed
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Whether a given field failed
    #[inline]
    #[must_use]
    pub fn has(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Failing fields in form order
    #[must_use]
    pub fn fields(&self) -> Vec<Field> {
        self.errors.iter().map(|e| e.field).collect()
    }

    /// Iterate over errors
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Number of failing fields (never zero)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether there are no errors
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} invalid field(s)", self.errors.len())?;
        for error in &self.errors {
            write!(f, "; {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_not_an_error() {
        assert!(ValidationErrors::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn sorted_into_form_order() {
        let errors = ValidationErrors::from_vec(vec![
            FieldError::new(Field::ReferralSource, RuleKind::Required, "b"),
            FieldError::new(Field::FullName, RuleKind::MinLength, "a"),
        ])
        .unwrap();
        assert_eq!(errors.fields(), vec![Field::FullName, Field::ReferralSource]);
        assert_eq!(errors.len(), 2);
        assert!(!errors.is_empty());
        assert_eq!(
            errors.to_string(),
            "2 invalid field(s); fullName: a; referralSource: b"
        );
    }
}
