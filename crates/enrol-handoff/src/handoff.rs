//! Hand-off preparation
//!
//! Turns a record into the message and the link that opens a chat with the
//! academy. The document itself travels separately.

use enrol_record::RegistrationRecord;
use serde::{Deserialize, Serialize};

use crate::error::HandoffError;
use crate::link::{normalize_base_url, normalize_recipient, DeepLink, DEFAULT_BASE_URL, DEFAULT_RECIPIENT};
use crate::message::MessageTemplate;

/// Where hand-off links point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HandoffConfig {
    /// Messaging endpoint
    pub base_url: String,
    /// Recipient number
    pub recipient: String,
}

impl HandoffConfig {
    /// Check both values without building a link
    ///
    /// # Errors
    /// Returns error if the base URL or the recipient is malformed
    pub fn validate(&self) -> Result<(), HandoffError> {
        normalize_base_url(&self.base_url)?;
        normalize_recipient(&self.recipient)?;
        Ok(())
    }
}

impl Default for HandoffConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            recipient: DEFAULT_RECIPIENT.to_string(),
        }
    }
}

/// Message and link ready to be opened
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandOff {
    /// Plain message text
    pub message: String,
    /// Link carrying the encoded message
    pub link: DeepLink,
}

/// Prepares hand-offs for records
#[derive(Debug, Clone, Default)]
pub struct Handoff {
    config: HandoffConfig,
    template: MessageTemplate,
}

impl Handoff {
    /// Create with endpoint settings
    #[must_use]
    pub fn new(config: HandoffConfig) -> Self {
        Self {
            config,
            template: MessageTemplate::default(),
        }
    }

    /// With a message template
    #[must_use]
    pub fn with_template(mut self, template: MessageTemplate) -> Self {
        self.template = template;
        self
    }

    /// Endpoint settings
    #[inline]
    #[must_use]
    pub fn config(&self) -> &HandoffConfig {
        &self.config
    }

    /// Compose the message and its link
    ///
    /// # Errors
    /// Returns error if the endpoint settings are malformed
    pub fn prepare(&self, record: &RegistrationRecord) -> Result<HandOff, HandoffError> {
        let message = self.template.compose(record);
        let link = DeepLink::builder()
            .base_url(self.config.base_url.as_str())
            .recipient(self.config.recipient.as_str())
            .text(message.as_str())
            .build()?;
        tracing::debug!(bytes = link.as_str().len(), "hand-off link built");
        Ok(HandOff { message, link })
    }
}
