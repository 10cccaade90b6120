//! Submission pipeline
//!
//! validate → assemble → lay out → render → hand-off. Each stage either
//! succeeds or stops the submission; nothing is written to disk here.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use enrol_document::{registration_document, Document, PdfRenderer, Renderer, TextRenderer};
use enrol_handoff::{HandOff, Handoff};
use enrol_record::{Assembler, RegistrationRecord, SubmissionRef};
use enrol_schema::{ApplicationInput, Schema};
use serde::Serialize;

use crate::config::EnrolConfig;
use crate::error::EnrolError;
use crate::form::FormState;

/// File name prefix of registration documents
pub const DOCUMENT_PREFIX: &str = "ficha-inscricao";

/// A rendered document ready to be saved or shared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Suggested file name
    pub file_name: String,
    /// IANA media type
    pub media_type: &'static str,
    /// File content
    pub bytes: Vec<u8>,
}

impl RenderedDocument {
    /// Write into a directory, creating it if needed
    ///
    /// # Errors
    /// Returns error if the directory or file cannot be written
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, EnrolError> {
        std::fs::create_dir_all(dir).map_err(|e| EnrolError::io(dir, e))?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes).map_err(|e| EnrolError::io(&path, e))?;
        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "document written");
        Ok(path)
    }
}

/// Everything produced by a successful submission
#[derive(Debug, Clone)]
pub struct Submission {
    /// Normalized record
    pub record: RegistrationRecord,
    /// Content reference of the record
    pub reference: SubmissionRef,
    /// Rendered registration form
    pub document: RenderedDocument,
    /// Message and link for the academy
    pub handoff: HandOff,
}

impl Submission {
    /// Serializable overview, without the document bytes
    #[must_use]
    pub fn summary(&self) -> SubmissionSummary<'_> {
        SubmissionSummary {
            reference: &self.reference,
            file_name: &self.document.file_name,
            record: &self.record,
            message: &self.handoff.message,
            link: self.handoff.link.as_str(),
        }
    }
}

/// JSON view of a [`Submission`]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSummary<'a> {
    /// Content reference
    pub reference: &'a SubmissionRef,
    /// Document file name
    pub file_name: &'a str,
    /// Normalized record
    pub record: &'a RegistrationRecord,
    /// Hand-off message
    pub message: &'a str,
    /// Hand-off link
    pub link: &'a str,
}

/// Runs submissions against one configuration
#[derive(Debug, Clone)]
pub struct Registrar {
    config: EnrolConfig,
    schema: Schema,
    assembler: Assembler,
    handoff: Handoff,
}

impl Registrar {
    /// Create from a configuration
    ///
    /// # Errors
    /// Returns error if the configuration is inconsistent
    pub fn new(config: EnrolConfig) -> Result<Self, EnrolError> {
        config.validate()?;
        let schema = config.schema();
        let assembler = Assembler::new(config.courses.clone());
        let handoff = Handoff::new(config.handoff.clone()).with_template(config.message_template());
        Ok(Self {
            config,
            schema,
            assembler,
            handoff,
        })
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EnrolConfig {
        &self.config
    }

    /// Active schema
    #[inline]
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Validate and assemble without rendering
    ///
    /// # Errors
    /// Returns [`EnrolError::Validation`] listing every invalid field
    pub fn record(&self, input: &ApplicationInput) -> Result<RegistrationRecord, EnrolError> {
        let validated = self.schema.validate(input)?;
        Ok(self.assembler.assemble(&validated))
    }

    /// Lay out the registration form for a record
    ///
    /// # Errors
    /// Returns error if the date format cannot format `today`
    pub fn layout(
        &self,
        record: &RegistrationRecord,
        today: NaiveDate,
    ) -> Result<Document, EnrolError> {
        let filled_on = self.config.document.format_date(today)?;
        Ok(registration_document(record, &self.config.document_options(filled_on)))
    }

    /// Plain-text preview of the registration form
    ///
    /// # Errors
    /// Returns error if the layout cannot be rendered
    pub fn preview(&self, record: &RegistrationRecord, today: NaiveDate) -> Result<String, EnrolError> {
        Ok(TextRenderer::new().render_string(&self.layout(record, today)?)?)
    }

    /// Run a full submission
    ///
    /// # Errors
    /// Returns error if validation, rendering or the hand-off fails
    pub fn submit(&self, input: &ApplicationInput, today: NaiveDate) -> Result<Submission, EnrolError> {
        let record = self.record(input)?;
        let reference = record.reference()?;
        tracing::info!(reference = %reference.short(), "application accepted");

        let renderer = PdfRenderer::new();
        let bytes = renderer.render(&self.layout(&record, today)?)?;
        let document = RenderedDocument {
            file_name: format!("{DOCUMENT_PREFIX}-{}.{}", reference.short(), renderer.extension()),
            media_type: renderer.media_type(),
            bytes,
        };

        let handoff = self.handoff.prepare(&record)?;
        tracing::info!(file = %document.file_name, "submission ready");

        Ok(Submission {
            record,
            reference,
            document,
            handoff,
        })
    }

    /// Submit a form, resetting it on success
    ///
    /// On error the form is left as it was.
    ///
    /// # Errors
    /// Same as [`Registrar::submit`]
    pub fn submit_form(&self, form: &mut FormState, today: NaiveDate) -> Result<Submission, EnrolError> {
        let submission = self.submit(form.input(), today)?;
        form.reset();
        Ok(submission)
    }
}
