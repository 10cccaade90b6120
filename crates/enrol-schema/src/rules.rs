//! Declarative field constraints
//!
//! A [`FieldSpec`] lists the [`Constraint`]s of one field in the order they
//! are checked. The first constraint that rejects the value produces the
//! field's error; later constraints are not consulted.

use std::fmt::{self, Display, Formatter};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::FieldError;
use crate::field::Field;
use crate::input::ApplicationInput;

static WHATSAPP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^9[0-9]{2}\s?[0-9]{3}\s?[0-9]{3}$").expect("whatsapp pattern is valid")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern is valid")
});

/// Named text patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Pattern {
    /// Angolan mobile number: `9xx xxx xxx`, spaces optional
    Whatsapp,
    /// E-mail address
    Email,
}

impl Pattern {
    /// Test a value against the pattern
    #[must_use]
    pub fn is_match(self, value: &str) -> bool {
        match self {
            Pattern::Whatsapp => WHATSAPP_RE.is_match(value),
            Pattern::Email => {
                // the regex engine has no look-ahead
                !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
            }
        }
    }
}

/// Discriminant of a [`Rule`], reported with field errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    Required,
    MinLength,
    Number,
    Integer,
    Positive,
    Min,
    Max,
    Pattern,
    OneOf,
    MinItems,
    KnownItems,
    RequiredIf,
}

/// A single constraint on a field value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum Rule {
    /// Value must be present
    Required,
    /// Text must have at least this many characters
    MinChars { min: usize },
    /// Coerced value must be a number
    Number,
    /// Number must have no fractional part
    Integer,
    /// Number must be greater than zero
    Positive,
    /// Number must be at least this
    AtLeast { min: f64 },
    /// Number must be at most this
    AtMost { max: f64 },
    /// Text must match a named pattern
    Matches { pattern: Pattern },
    /// Text must be one of these values
    OneOf { values: Vec<String> },
    /// List must have at least this many items
    MinItems { min: usize },
    /// Every list item must be one of these values
    ItemsIn { values: Vec<String> },
    /// Text must be non-blank when another list field contains a value
    RequiredWhenSelected { field: Field, value: String },
}

/// Borrowed view of one field's raw value
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Missing,
    Text(&'a str),
    Number(f64),
    List(&'a [String]),
}

impl<'a> FieldValue<'a> {
    /// Extract a field's value from raw input
    #[must_use]
    pub fn of(field: Field, input: &'a ApplicationInput) -> Self {
        let text = |v: &'a Option<String>| v.as_deref().map_or(FieldValue::Missing, FieldValue::Text);
        match field {
            Field::FullName => text(&input.full_name),
            Field::Age => input
                .age
                .as_ref()
                .map_or(FieldValue::Missing, |a| FieldValue::Number(a.coerce())),
            Field::Whatsapp => text(&input.whatsapp),
            Field::Email => text(&input.email),
            Field::Education => text(&input.education),
            Field::CoursesOfInterest => FieldValue::List(&input.courses_of_interest),
            Field::OtherCourse => text(&input.other_course),
            Field::KnowledgeLevel => text(&input.knowledge_level),
            Field::ReferralSource => text(&input.referral_source),
        }
    }

    /// Missing, empty text, or empty list
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Missing => true,
            FieldValue::Text(t) => t.is_empty(),
            FieldValue::Number(_) => false,
            FieldValue::List(items) => items.is_empty(),
        }
    }
}

impl Rule {
    /// Kind of this rule
    #[must_use]
    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::Required => RuleKind::Required,
            Rule::MinChars { .. } => RuleKind::MinLength,
            Rule::Number => RuleKind::Number,
            Rule::Integer => RuleKind::Integer,
            Rule::Positive => RuleKind::Positive,
            Rule::AtLeast { .. } => RuleKind::Min,
            Rule::AtMost { .. } => RuleKind::Max,
            Rule::Matches { .. } => RuleKind::Pattern,
            Rule::OneOf { .. } => RuleKind::OneOf,
            Rule::MinItems { .. } => RuleKind::MinItems,
            Rule::ItemsIn { .. } => RuleKind::KnownItems,
            Rule::RequiredWhenSelected { .. } => RuleKind::RequiredIf,
        }
    }

    /// Check a value
    ///
    /// Rules that do not apply to the value's shape pass. On failure the
    /// error may carry a detail, such as the offending list item.
    ///
    /// # Errors
    /// Returns `Err(detail)` when the value violates the rule
    pub fn check(&self, value: FieldValue<'_>, input: &ApplicationInput) -> Result<(), Option<String>> {
        let ok = match (self, value) {
            (Rule::Required, v) => !matches!(v, FieldValue::Missing),
            (Rule::MinChars { min }, FieldValue::Text(t)) => t.chars().count() >= *min,
            (Rule::Number, FieldValue::Number(n)) => !n.is_nan(),
            (Rule::Integer, FieldValue::Number(n)) => n.is_finite() && n.fract() == 0.0,
            (Rule::Positive, FieldValue::Number(n)) => n > 0.0,
            (Rule::AtLeast { min }, FieldValue::Number(n)) => n >= *min,
            (Rule::AtMost { max }, FieldValue::Number(n)) => n <= *max,
            (Rule::Matches { pattern }, FieldValue::Text(t)) => pattern.is_match(t),
            (Rule::OneOf { values }, FieldValue::Text(t)) => values.iter().any(|v| v == t),
            (Rule::MinItems { min }, FieldValue::List(items)) => items.len() >= *min,
            (Rule::ItemsIn { values }, FieldValue::List(items)) => {
                if let Some(unknown) = items.iter().find(|i| !values.contains(i)) {
                    return Err(Some(unknown.clone()));
                }
                true
            }
            (Rule::RequiredWhenSelected { field, value: selected }, v) => {
                let triggered = match FieldValue::of(*field, input) {
                    FieldValue::List(items) => items.iter().any(|i| i == selected),
                    FieldValue::Text(t) => t == selected,
                    _ => false,
                };
                !triggered || matches!(v, FieldValue::Text(t) if !t.trim().is_empty())
            }
            _ => true,
        };

        if ok {
            Ok(())
        } else {
            Err(None)
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => f.write_str("required"),
            Rule::MinChars { min } => write!(f, "at least {min} characters"),
            Rule::Number => f.write_str("number"),
            Rule::Integer => f.write_str("integer"),
            Rule::Positive => f.write_str("positive"),
            Rule::AtLeast { min } => write!(f, ">= {min}"),
            Rule::AtMost { max } => write!(f, "<= {max}"),
            Rule::Matches { pattern: Pattern::Whatsapp } => f.write_str("matches 9xx xxx xxx"),
            Rule::Matches { pattern: Pattern::Email } => f.write_str("e-mail address"),
            Rule::OneOf { values } => write!(f, "one of [{}]", values.join(", ")),
            Rule::MinItems { min } => write!(f, "at least {min} selected"),
            Rule::ItemsIn { values } => write!(f, "each in [{}]", values.join(", ")),
            Rule::RequiredWhenSelected { field, value } => {
                write!(f, "required when {field} includes '{value}'")
            }
        }
    }
}

/// A rule with the message shown when it fails
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constraint {
    /// Rule to check
    #[serde(flatten)]
    pub rule: Rule,
    /// Message for the applicant
    pub message: String,
}

impl Constraint {
    /// Pair a rule with its message
    pub fn new(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

/// Constraints of one field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Field being described
    pub field: Field,
    /// When true, a blank value skips every constraint
    pub optional: bool,
    /// Constraints in check order
    pub constraints: Vec<Constraint>,
}

impl FieldSpec {
    /// Mandatory field with no constraints yet
    #[must_use]
    pub fn required(field: Field) -> Self {
        Self {
            field,
            optional: false,
            constraints: Vec::new(),
        }
    }

    /// Optional field with no constraints yet
    #[must_use]
    pub fn optional(field: Field) -> Self {
        Self {
            field,
            optional: true,
            constraints: Vec::new(),
        }
    }

    /// Append a constraint
    #[must_use]
    pub fn rule(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.constraints.push(Constraint::new(rule, message));
        self
    }

    /// Check this field of the input
    ///
    /// # Errors
    /// Returns the first failing constraint as a [`FieldError`]
    pub fn check(&self, input: &ApplicationInput) -> Result<(), FieldError> {
        let value = FieldValue::of(self.field, input);
        if self.optional && value.is_blank() {
            return Ok(());
        }

        for constraint in &self.constraints {
            if let Err(detail) = constraint.rule.check(value, input) {
                let message = match detail {
                    Some(detail) => format!("{}: {detail}", constraint.message),
                    None => constraint.message.clone(),
                };
                return Err(FieldError::new(self.field, constraint.rule.kind(), message));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(rule: Rule, value: FieldValue<'_>) -> bool {
        rule.check(value, &ApplicationInput::default()).is_ok()
    }

    #[test]
    fn whatsapp_pattern() {
        assert!(Pattern::Whatsapp.is_match("923 456 789"));
        assert!(Pattern::Whatsapp.is_match("923456789"));
        assert!(Pattern::Whatsapp.is_match("923 456789"));
        assert!(!Pattern::Whatsapp.is_match("823 456 789"));
        assert!(!Pattern::Whatsapp.is_match("923  456 789"));
        assert!(!Pattern::Whatsapp.is_match("+244 923 456 789"));
        assert!(!Pattern::Whatsapp.is_match("92345678"));
    }

    #[test]
    fn email_pattern() {
        assert!(Pattern::Email.is_match("ana.silva@example.ao"));
        assert!(Pattern::Email.is_match("A+tag@Mail.Example.COM"));
        assert!(!Pattern::Email.is_match(".ana@example.ao"));
        assert!(!Pattern::Email.is_match("ana..silva@example.ao"));
        assert!(!Pattern::Email.is_match("ana.@example.ao"));
        assert!(!Pattern::Email.is_match("ana@example"));
        assert!(!Pattern::Email.is_match("ana@-example.ao"));
        assert!(!Pattern::Email.is_match("ana@example.a"));
    }

    #[test]
    fn numeric_rules() {
        assert!(check(Rule::Integer, FieldValue::Number(12.0)));
        assert!(!check(Rule::Integer, FieldValue::Number(12.5)));
        assert!(!check(Rule::Integer, FieldValue::Number(f64::INFINITY)));
        assert!(!check(Rule::Number, FieldValue::Number(f64::NAN)));
        assert!(!check(Rule::Positive, FieldValue::Number(0.0)));
        assert!(check(Rule::AtLeast { min: 5.0 }, FieldValue::Number(5.0)));
        assert!(!check(Rule::AtMost { max: 99.0 }, FieldValue::Number(100.0)));
    }

    #[test]
    fn min_chars_counts_characters_not_bytes() {
        assert!(check(Rule::MinChars { min: 3 }, FieldValue::Text("Zé ")));
        assert!(!check(Rule::MinChars { min: 3 }, FieldValue::Text("Zé")));
    }

    #[test]
    fn items_in_reports_unknown_item() {
        let items = vec!["ai".to_string(), "cooking".to_string()];
        let rule = Rule::ItemsIn {
            values: vec!["ai".to_string()],
        };
        let result = rule.check(FieldValue::List(&items), &ApplicationInput::default());
        assert_eq!(result, Err(Some("cooking".to_string())));
    }

    #[test]
    fn required_when_selected() {
        let rule = Rule::RequiredWhenSelected {
            field: Field::CoursesOfInterest,
            value: "other".to_string(),
        };
        let input = ApplicationInput::new().with_course("other");
        assert!(rule.check(FieldValue::Missing, &input).is_err());
        assert!(rule.check(FieldValue::Text("  "), &input).is_err());
        assert!(rule.check(FieldValue::Text("Robótica"), &input).is_ok());

        let untriggered = ApplicationInput::new().with_course("ai");
        assert!(rule.check(FieldValue::Missing, &untriggered).is_ok());
    }

    #[test]
    fn optional_spec_skips_blank() {
        let spec = FieldSpec::optional(Field::Email)
            .rule(Rule::Matches { pattern: Pattern::Email }, "Email inválido");
        assert!(spec.check(&ApplicationInput::new()).is_ok());
        assert!(spec.check(&ApplicationInput::new().with_email("")).is_ok());

        let err = spec
            .check(&ApplicationInput::new().with_email("nope"))
            .unwrap_err();
        assert_eq!(err.rule, RuleKind::Pattern);
        assert_eq!(err.message, "Email inválido");
    }

    #[test]
    fn first_failing_constraint_wins() {
        let spec = FieldSpec::required(Field::Age)
            .rule(Rule::Required, "required")
            .rule(Rule::Positive, "positive")
            .rule(Rule::AtLeast { min: 5.0 }, "min");
        let err = spec
            .check(&ApplicationInput::new().with_age(""))
            .unwrap_err();
        assert_eq!(err.message, "positive");
    }
}
