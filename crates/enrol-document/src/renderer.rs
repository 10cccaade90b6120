//! Output backends for laid-out documents

use crate::layout::Document;

/// Serializes a [`Document`] to bytes
///
/// Implement this trait to add an output format.
pub trait Renderer {
    /// Render the whole document
    ///
    /// # Errors
    /// Returns error if the document cannot be represented in this format
    fn render(&self, document: &Document) -> Result<Vec<u8>, RenderError>;

    /// File extension without the dot
    fn extension(&self) -> &'static str;

    /// IANA media type
    fn media_type(&self) -> &'static str;
}

/// Rendering errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Document has no pages
    #[error("document has no pages")]
    EmptyDocument,

    /// A drawing operation has a non-finite coordinate or size
    #[error("non-finite coordinate in operation {op} on page {page}")]
    InvalidCoordinate {
        /// Zero-based page index
        page: usize,
        /// Zero-based operation index on that page
        op: usize,
    },
}
