//! Enrolment configuration
//!
//! Loaded from TOML. Every key has a default, so an empty file is a valid
//! configuration:
//!
//! ```toml
//! [academy]
//! name = "TECH_STAR ACADEMY"
//!
//! [handoff]
//! recipient = "244952993627"
//!
//! [schema]
//! min_age = 5
//!
//! [document]
//! date_format = "%d/%m/%Y"
//!
//! [[courses]]
//! id = "design"
//! label = "Design Gráfico"
//! ```

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use enrol_document::DocumentOptions;
use enrol_handoff::{HandoffConfig, HandoffError, MessageTemplate};
use enrol_schema::{CourseCatalog, Schema, SchemaConfig};
use serde::{Deserialize, Serialize};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// TOML is malformed or has unknown keys
    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// No courses configured
    #[error("course catalogue is empty")]
    EmptyCatalog,

    /// Two courses share an identifier
    #[error("duplicate course id: {0}")]
    DuplicateCourse(String),

    /// A course has a blank id or label
    #[error("course {0:?} has a blank id or label")]
    BlankCourse(String),

    /// Minimum age exceeds maximum age
    #[error("min_age {min} exceeds max_age {max}")]
    AgeRange {
        /// Configured minimum
        min: u32,
        /// Configured maximum
        max: u32,
    },

    /// Date format is not a valid strftime pattern
    #[error("invalid date format: {0:?}")]
    DateFormat(String),

    /// Hand-off endpoint is malformed
    #[error(transparent)]
    Handoff(#[from] HandoffError),
}

/// Academy branding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AcademyConfig {
    /// Full name, used in headings
    pub name: String,
    /// Short name, used in field labels
    pub short_name: String,
    /// Document subtitle
    pub subtitle: String,
    /// Document footer
    pub footer: String,
}

impl Default for AcademyConfig {
    fn default() -> Self {
        let options = DocumentOptions::default();
        Self {
            name: options.title,
            short_name: options.academy_name,
            subtitle: options.subtitle,
            footer: options.footer,
        }
    }
}

/// Document output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentConfig {
    /// strftime pattern for the fill-in date
    pub date_format: String,
    /// Directory documents are written to
    pub output_dir: PathBuf,
}

impl DocumentConfig {
    /// Format a fill-in date with `date_format`
    ///
    /// # Errors
    /// Returns [`ConfigError::DateFormat`] if the pattern is malformed or
    /// asks for fields a calendar date lacks (time, zone)
    pub fn format_date(&self, date: NaiveDate) -> Result<String, ConfigError> {
        let invalid = || ConfigError::DateFormat(self.date_format.clone());
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(invalid());
        }
        let mut out = String::new();
        write!(out, "{}", date.format(&self.date_format)).map_err(|_| invalid())?;
        Ok(out)
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            date_format: "%d/%m/%Y".to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnrolConfig {
    /// Branding
    pub academy: AcademyConfig,
    /// Hand-off endpoint
    pub handoff: HandoffConfig,
    /// Validation limits
    pub schema: SchemaConfig,
    /// Document output
    pub document: DocumentConfig,
    /// Course catalogue
    pub courses: CourseCatalog,
}

impl EnrolConfig {
    /// Parse from a TOML string
    ///
    /// # Errors
    /// Returns error if the TOML is malformed
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load and validate a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed or validated
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), courses = config.courses.len(), "config loaded");
        Ok(config)
    }

    /// Check internal consistency
    ///
    /// # Errors
    /// Returns the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.courses.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if let Some(id) = self.courses.duplicate_id() {
            return Err(ConfigError::DuplicateCourse(id.to_string()));
        }
        if let Some(course) = self
            .courses
            .iter()
            .find(|c| c.id.trim().is_empty() || c.label.trim().is_empty())
        {
            return Err(ConfigError::BlankCourse(course.id.clone()));
        }
        if let Some(max) = self.schema.max_age {
            if self.schema.min_age > max {
                return Err(ConfigError::AgeRange {
                    min: self.schema.min_age,
                    max,
                });
            }
        }
        self.document.format_date(NaiveDate::MIN)?;
        self.handoff.validate()?;
        Ok(())
    }

    /// Schema for these settings
    #[must_use]
    pub fn schema(&self) -> Schema {
        Schema::new(self.schema.clone(), self.courses.clone())
    }

    /// Message template for these settings
    #[must_use]
    pub fn message_template(&self) -> MessageTemplate {
        MessageTemplate::new(self.academy.name.as_str())
    }

    /// Document options for a formatted fill-in date
    #[must_use]
    pub fn document_options(&self, filled_on: impl Into<String>) -> DocumentOptions {
        DocumentOptions {
            title: self.academy.name.clone(),
            subtitle: self.academy.subtitle.clone(),
            footer: self.academy.footer.clone(),
            academy_name: self.academy.short_name.clone(),
            filled_on: filled_on.into(),
        }
    }
}
