//! Enrolment Hand-off
//!
//! Composes the announcement message for a registration and the deep link
//! that opens a chat with the academy, message pre-filled.
//!
//! # Example
//!
//! ```rust,ignore
//! use enrol_handoff::Handoff;
//!
//! let handoff = Handoff::default().prepare(&record)?;
//! println!("{}", handoff.link);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod encode;
mod error;
mod handoff;
mod link;
mod message;

// Re-exports
pub use encode::encode_uri_component;
pub use error::HandoffError;
pub use handoff::{HandOff, Handoff, HandoffConfig};
pub use link::{
    normalize_base_url, normalize_recipient, DeepLink, DeepLinkBuilder, DEFAULT_BASE_URL,
    DEFAULT_RECIPIENT,
};
pub use message::MessageTemplate;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
