//! Enrolment Schema
//!
//! Declarative validation for the applicant registration form.
//!
//! # Overview
//!
//! - **Field**: the nine inputs of the form
//! - **Rule / FieldSpec**: constraints per field, checked in order
//! - **Schema**: validates an [`ApplicationInput`] into a [`ValidatedApplication`]
//! - **CourseCatalog**: the courses an applicant can pick
//!
//! # Example
//!
//! ```rust
//! use enrol_schema::{ApplicationInput, Field, Schema};
//!
//! let schema = Schema::default();
//! let input = ApplicationInput::new()
//!     .with_full_name("Ana Silva")
//!     .with_age("17")
//!     .with_whatsapp("923 456 789")
//!     .with_education("médio")
//!     .with_course("ai")
//!     .with_knowledge_level("Iniciante")
//!     .with_referral_source("amigos");
//!
//! let validated = schema.validate(&input).unwrap();
//! assert_eq!(validated.age(), 17);
//!
//! let errors = schema.validate(&ApplicationInput::new()).unwrap_err();
//! assert!(errors.has(Field::FullName));
//! ```

#![warn(missing_docs)]

pub mod choice;
pub mod course;
pub mod error;
pub mod field;
pub mod input;
pub mod rules;
pub mod schema;

// Re-exports
pub use choice::{Choice, Education, KnowledgeLevel, ReferralSource, UnknownChoice};
pub use course::{Course, CourseCatalog, OTHER_COURSE_ID};
pub use error::{FieldError, ValidationErrors};
pub use field::Field;
pub use input::{AgeInput, ApplicationInput};
pub use rules::{Constraint, FieldSpec, FieldValue, Pattern, Rule, RuleKind};
pub use schema::{Schema, SchemaConfig, ValidatedApplication};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for validation
    pub use crate::{
        ApplicationInput, Choice, CourseCatalog, Education, Field, KnowledgeLevel, ReferralSource,
        Schema, SchemaConfig, ValidatedApplication, ValidationErrors,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
