//! The registration schema
//!
//! [`Schema`] turns an [`ApplicationInput`] into a [`ValidatedApplication`]
//! or reports every failing field.

use serde::{Deserialize, Serialize};

use crate::choice::{Choice, Education, KnowledgeLevel, ReferralSource};
use crate::course::{CourseCatalog, OTHER_COURSE_ID};
use crate::error::{FieldError, ValidationErrors};
use crate::field::Field;
use crate::input::ApplicationInput;
use crate::rules::{FieldSpec, FieldValue, Pattern, Rule, RuleKind};

/// Tunable limits of the schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchemaConfig {
    /// Minimum characters in the full name
    pub min_name_chars: usize,
    /// Minimum age in years
    pub min_age: u32,
    /// Maximum age in years, unbounded when absent
    pub max_age: Option<u32>,
    /// Whether selecting the "other" course requires its free text
    pub require_other_course: bool,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            min_name_chars: 3,
            min_age: 5,
            max_age: None,
            require_other_course: true,
        }
    }
}

/// Output of a successful validation
///
/// Only [`Schema::validate`] constructs this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedApplication {
    full_name: String,
    age: u32,
    whatsapp: String,
    email: Option<String>,
    education: Education,
    courses: Vec<String>,
    other_course: Option<String>,
    knowledge_level: KnowledgeLevel,
    referral_source: ReferralSource,
}

impl ValidatedApplication {
    /// Full name as entered
    #[inline]
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Age in years
    #[inline]
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// WhatsApp number as entered
    #[inline]
    #[must_use]
    pub fn whatsapp(&self) -> &str {
        &self.whatsapp
    }

    /// E-mail, if one was given
    #[inline]
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Schooling level
    #[inline]
    #[must_use]
    pub fn education(&self) -> Education {
        self.education
    }

    /// Selected course identifiers, first occurrence order
    #[inline]
    #[must_use]
    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    /// Trimmed free text for the "other" course, when selected and filled
    #[inline]
    #[must_use]
    pub fn other_course(&self) -> Option<&str> {
        self.other_course.as_deref()
    }

    /// Knowledge level
    #[inline]
    #[must_use]
    pub fn knowledge_level(&self) -> KnowledgeLevel {
        self.knowledge_level
    }

    /// Referral source
    #[inline]
    #[must_use]
    pub fn referral_source(&self) -> ReferralSource {
        self.referral_source
    }
}

/// Field constraints for the registration form
#[derive(Debug, Clone)]
pub struct Schema {
    config: SchemaConfig,
    catalog: CourseCatalog,
    specs: Vec<FieldSpec>,
}

impl Schema {
    /// Build the schema for a configuration and course catalogue
    #[must_use]
    pub fn new(config: SchemaConfig, catalog: CourseCatalog) -> Self {
        let specs = build_specs(&config, &catalog);
        Self {
            config,
            catalog,
            specs,
        }
    }

    /// Declarative constraints, one entry per field in form order
    #[inline]
    #[must_use]
    pub fn field_specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    /// Constraints of one field
    #[must_use]
    pub fn spec(&self, field: Field) -> Option<&FieldSpec> {
        self.specs.iter().find(|s| s.field == field)
    }

    /// Course catalogue in use
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    /// Limits in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }

    /// Validate raw input
    ///
    /// Every field is checked; the error lists each failing field with the
    /// message of its first failing constraint.
    ///
    /// # Errors
    /// Returns [`ValidationErrors`] if any field fails
    pub fn validate(&self, input: &ApplicationInput) -> Result<ValidatedApplication, ValidationErrors> {
        let errors: Vec<FieldError> = self
            .specs
            .iter()
            .filter_map(|spec| spec.check(input).err())
            .collect();

        if let Some(errors) = ValidationErrors::from_vec(errors) {
            tracing::warn!(fields = ?errors.fields(), "application rejected");
            return Err(errors);
        }

        let validated = self.extract(input).map_err(ValidationErrors::single)?;
        tracing::debug!(courses = validated.courses.len(), "application accepted");
        Ok(validated)
    }

    /// Convert input that passed every constraint into typed values
    fn extract(&self, input: &ApplicationInput) -> Result<ValidatedApplication, FieldError> {
        let age = match FieldValue::of(Field::Age, input) {
            FieldValue::Number(n) if n <= f64::from(u32::MAX) => n as u32,
            _ => {
                return Err(FieldError::new(
                    Field::Age,
                    RuleKind::Max,
                    "Idade fora do intervalo permitido",
                ))
            }
        };

        let mut courses: Vec<String> = Vec::with_capacity(input.courses_of_interest.len());
        for id in &input.courses_of_interest {
            if !courses.contains(id) {
                courses.push(id.clone());
            }
        }

        let other_course = if courses.iter().any(|c| c == OTHER_COURSE_ID) {
            input
                .other_course
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
        } else {
            None
        };

        Ok(ValidatedApplication {
            full_name: input.full_name.clone().unwrap_or_default(),
            age,
            whatsapp: input.whatsapp.clone().unwrap_or_default(),
            email: input.email.clone().filter(|e| !e.is_empty()),
            education: choice(Field::Education, input.education.as_deref())?,
            courses,
            other_course,
            knowledge_level: choice(Field::KnowledgeLevel, input.knowledge_level.as_deref())?,
            referral_source: choice(Field::ReferralSource, input.referral_source.as_deref())?,
        })
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new(SchemaConfig::default(), CourseCatalog::default())
    }
}

fn choice<C: Choice>(field: Field, value: Option<&str>) -> Result<C, FieldError> {
    value
        .and_then(C::parse)
        .ok_or_else(|| FieldError::new(field, RuleKind::OneOf, "Valor inválido"))
}

fn owned(values: Vec<&'static str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}

fn build_specs(config: &SchemaConfig, catalog: &CourseCatalog) -> Vec<FieldSpec> {
    let name_message = format!(
        "Nome deve ter pelo menos {} caracteres",
        config.min_name_chars
    );
    let min_age_message = format!("Idade deve ser pelo menos {} anos", config.min_age);
    let whatsapp_message = "Formato inválido. Use: 9xx xxx xxx";

    let mut age = FieldSpec::required(Field::Age)
        .rule(Rule::Required, "Idade deve ser um número")
        .rule(Rule::Number, "Idade deve ser um número")
        .rule(Rule::Integer, "Idade deve ser um número inteiro")
        .rule(Rule::Positive, "Idade deve ser um número positivo")
        .rule(
            Rule::AtLeast {
                min: f64::from(config.min_age),
            },
            min_age_message,
        );
    if let Some(max) = config.max_age {
        age = age.rule(
            Rule::AtMost {
                max: f64::from(max),
            },
            format!("Idade deve ser no máximo {max} anos"),
        );
    }

    let mut other = FieldSpec::required(Field::OtherCourse);
    if config.require_other_course {
        other = other.rule(
            Rule::RequiredWhenSelected {
                field: Field::CoursesOfInterest,
                value: OTHER_COURSE_ID.to_string(),
            },
            "Especifique o outro curso",
        );
    }

    vec![
        FieldSpec::required(Field::FullName)
            .rule(Rule::Required, name_message.clone())
            .rule(
                Rule::MinChars {
                    min: config.min_name_chars,
                },
                name_message,
            ),
        age,
        FieldSpec::required(Field::Whatsapp)
            .rule(Rule::Required, whatsapp_message)
            .rule(
                Rule::Matches {
                    pattern: Pattern::Whatsapp,
                },
                whatsapp_message,
            ),
        FieldSpec::optional(Field::Email).rule(
            Rule::Matches {
                pattern: Pattern::Email,
            },
            "Email inválido",
        ),
        FieldSpec::required(Field::Education)
            .rule(Rule::Required, "Selecione a escolaridade")
            .rule(
                Rule::OneOf {
                    values: owned(Education::values()),
                },
                "Selecione a escolaridade",
            ),
        FieldSpec::required(Field::CoursesOfInterest)
            .rule(Rule::MinItems { min: 1 }, "Selecione pelo menos um curso")
            .rule(
                Rule::ItemsIn {
                    values: catalog.iter().map(|c| c.id.clone()).collect(),
                },
                "Curso desconhecido",
            ),
        other,
        FieldSpec::required(Field::KnowledgeLevel)
            .rule(Rule::Required, "Selecione o nível de conhecimento")
            .rule(
                Rule::OneOf {
                    values: owned(KnowledgeLevel::values()),
                },
                "Selecione o nível de conhecimento",
            ),
        FieldSpec::required(Field::ReferralSource)
            .rule(Rule::Required, "Selecione como soube de nós")
            .rule(
                Rule::OneOf {
                    values: owned(ReferralSource::values()),
                },
                "Selecione como soube de nós",
            ),
    ]
}
