//! Messaging deep links
//!
//! A deep link opens a chat with `recipient` and a pre-filled message:
//! `<base_url>/<digits>?text=<encoded message>`.

use std::fmt;

use serde::Serialize;

use crate::encode::encode_uri_component;
use crate::error::HandoffError;

/// Default messaging endpoint
pub const DEFAULT_BASE_URL: &str = "https://wa.me";

/// Default recipient (country code included)
pub const DEFAULT_RECIPIENT: &str = "244952993627";

const MIN_DIGITS: usize = 8;
const MAX_DIGITS: usize = 15;

/// Strip `+`, spaces and dashes and check the digit count
///
/// # Errors
/// Returns [`HandoffError::InvalidRecipient`] unless 8 to 15 ASCII digits remain
pub fn normalize_recipient(raw: &str) -> Result<String, HandoffError> {
    let digits: String = raw
        .chars()
        .filter(|c| !matches!(c, '+' | ' ' | '-'))
        .collect();
    let valid = (MIN_DIGITS..=MAX_DIGITS).contains(&digits.len())
        && digits.bytes().all(|b| b.is_ascii_digit());
    if valid {
        Ok(digits)
    } else {
        Err(HandoffError::InvalidRecipient(raw.to_string()))
    }
}

/// Check the scheme and drop trailing slashes
///
/// # Errors
/// Returns [`HandoffError::InvalidBaseUrl`] for anything but `http://` or `https://` with a host
pub fn normalize_base_url(raw: &str) -> Result<String, HandoffError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    match host {
        Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => {
            Ok(trimmed.to_string())
        }
        _ => Err(HandoffError::InvalidBaseUrl(raw.to_string())),
    }
}

/// A chat link with a pre-filled message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeepLink {
    url: String,
}

impl DeepLink {
    /// Start building a link
    #[inline]
    #[must_use]
    pub fn builder() -> DeepLinkBuilder {
        DeepLinkBuilder::default()
    }

    /// Full URL
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Builder for [`DeepLink`]
#[derive(Debug, Clone)]
pub struct DeepLinkBuilder {
    base_url: String,
    recipient: String,
    text: String,
}

impl DeepLinkBuilder {
    /// Set the endpoint
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the recipient number
    #[must_use]
    pub fn recipient(mut self, number: impl Into<String>) -> Self {
        self.recipient = number.into();
        self
    }

    /// Set the message
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Build the link
    ///
    /// # Errors
    /// Returns error if the base URL or the recipient is malformed
    pub fn build(self) -> Result<DeepLink, HandoffError> {
        let base = normalize_base_url(&self.base_url)?;
        let recipient = normalize_recipient(&self.recipient)?;
        Ok(DeepLink {
            url: format!("{base}/{recipient}?text={}", encode_uri_component(&self.text)),
        })
    }
}

impl Default for DeepLinkBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            recipient: DEFAULT_RECIPIENT.to_string(),
            text: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_academy() {
        let link = DeepLink::builder().text("Olá").build().unwrap();
        assert_eq!(link.as_str(), "https://wa.me/244952993627?text=Ol%C3%A1");
    }

    #[test]
    fn recipient_separators_stripped() {
        assert_eq!(normalize_recipient("+244 952-993-627").unwrap(), "244952993627");
    }

    #[test]
    fn recipient_length_checked() {
        assert!(normalize_recipient("1234567").is_err());
        assert!(normalize_recipient("12345678").is_ok());
        assert!(normalize_recipient("123456789012345").is_ok());
        assert!(normalize_recipient("1234567890123456").is_err());
        assert!(normalize_recipient("24495299362x").is_err());
    }

    #[test]
    fn base_url_scheme_checked() {
        assert_eq!(normalize_base_url("https://wa.me/").unwrap(), "https://wa.me");
        assert_eq!(normalize_base_url("http://localhost:8080").unwrap(), "http://localhost:8080");
        assert!(normalize_base_url("ftp://wa.me").is_err());
        assert!(normalize_base_url("wa.me").is_err());
        assert!(normalize_base_url("https://").is_err());
    }
}
