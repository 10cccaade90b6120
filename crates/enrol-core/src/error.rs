//! Error types for enrolment orchestration

use std::path::PathBuf;

use enrol_document::RenderError;
use enrol_handoff::HandoffError;
use enrol_record::RecordError;
use enrol_schema::ValidationErrors;

use crate::config::ConfigError;

/// Main enrolment error type
#[derive(Debug, thiserror::Error)]
pub enum EnrolError {
    /// Application failed validation
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Input file has an extension no decoder handles
    #[error("unsupported input format: {}", path.display())]
    UnsupportedInput {
        /// Offending file
        path: PathBuf,
    },

    /// Input file could not be decoded
    #[error("cannot decode {}: {message}", path.display())]
    InputDecode {
        /// Offending file
        path: PathBuf,
        /// Decoder message
        message: String,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Hand-off link could not be built
    #[error("hand-off failed: {0}")]
    Handoff(#[from] HandoffError),

    /// Document could not be rendered
    #[error("render failed: {0}")]
    Render(#[from] RenderError),

    /// Record could not be serialized
    #[error("record error: {0}")]
    Record(#[from] RecordError),

    /// Filesystem error
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl EnrolError {
    /// Whether the applicant can fix this by changing their input
    #[inline]
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::UnsupportedInput { .. } | Self::InputDecode { .. }
        )
    }

    /// Field errors, when this is a validation failure
    #[must_use]
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
