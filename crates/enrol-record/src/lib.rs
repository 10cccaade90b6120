//! Enrolment Records
//!
//! Normalized registration data assembled from validated applications.
//!
//! # Example
//!
//! ```rust
//! use enrol_record::Assembler;
//! use enrol_schema::{ApplicationInput, Schema};
//!
//! let input = ApplicationInput::new()
//!     .with_full_name("Ana Silva")
//!     .with_age("17")
//!     .with_whatsapp("923456789")
//!     .with_education("médio")
//!     .with_course("ai")
//!     .with_knowledge_level("Iniciante")
//!     .with_referral_source("amigos");
//!
//! let validated = Schema::default().validate(&input).unwrap();
//! let record = Assembler::default().assemble(&validated);
//! assert_eq!(record.courses_of_interest, vec!["Inteligência Artificial"]);
//! ```

#![warn(unreachable_pub)]

mod assembler;
mod record;
mod reference;

pub use assembler::{Assembler, UNSPECIFIED_OTHER_COURSE};
pub use record::{RegistrationRecord, EMAIL_NOT_PROVIDED};
pub use reference::SubmissionRef;

/// Record errors
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// JSON encoding failed
    #[error("record serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Reference string is not 64 hex chars
    #[error("invalid submission reference: {0}")]
    InvalidReference(String),
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
