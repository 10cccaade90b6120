//! Enrolment Documents
//!
//! Paginated layout of registration records and their serialization.
//!
//! # Core Concepts
//!
//! - [`Document`]: pages of positioned text and rules, in millimetres
//! - [`LayoutComposer`]: cursor-driven writer that breaks pages
//! - [`registration_document`]: the registration form layout
//! - [`Renderer`]: output backends ([`PdfRenderer`], [`TextRenderer`])
//!
//! # Example
//!
//! ```rust,ignore
//! use enrol_document::{registration_document, DocumentOptions, PdfRenderer, Renderer};
//!
//! let options = DocumentOptions::default().with_filled_on("19/10/2026");
//! let document = registration_document(&record, &options);
//! let bytes = PdfRenderer::new().render(&document)?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod composer;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod registration;
pub mod renderer;
pub mod text;

// Re-exports
pub use composer::{Footer, LayoutComposer, Margins};
pub use layout::{Align, Document, DocumentMetadata, DrawOp, Font, Page, PageSize, Rgb};
pub use metrics::text_width_mm;
pub use pdf::{encode_win_ansi, PdfRenderer};
pub use registration::{registration_document, DocumentOptions};
pub use renderer::{RenderError, Renderer};
pub use text::TextRenderer;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
