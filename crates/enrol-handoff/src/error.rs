//! Hand-off errors

/// Errors building a hand-off link
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandoffError {
    /// Recipient is not 8 to 15 digits once separators are removed
    #[error("invalid recipient number: {0:?}")]
    InvalidRecipient(String),

    /// Base URL is not an http(s) URL
    #[error("invalid base url: {0:?}")]
    InvalidBaseUrl(String),
}
