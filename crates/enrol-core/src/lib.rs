//! Enrolment Core
//!
//! Ties the enrolment crates together: configuration, form state, input
//! decoding and the submission pipeline.
//!
//! # Example
//!
//! ```rust,ignore
//! use enrol_core::{EnrolConfig, Registrar};
//!
//! let registrar = Registrar::new(EnrolConfig::default())?;
//! let submission = registrar.submit(&input, chrono::Local::now().date_naive())?;
//! submission.document.write_to(&registrar.config().document.output_dir)?;
//! println!("{}", submission.handoff.link);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod form;
pub mod input;
pub mod pipeline;

// Re-exports
pub use config::{AcademyConfig, ConfigError, DocumentConfig, EnrolConfig};
pub use error::EnrolError;
pub use form::FormState;
pub use input::{load_input, InputFormat};
pub use pipeline::{Registrar, RenderedDocument, Submission, SubmissionSummary, DOCUMENT_PREFIX};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
