//! Submission references
//!
//! A [`SubmissionRef`] is the Blake3 hash of a record's JSON encoding.
//! Identical records share a reference, so re-submitting the same data
//! names its output files identically.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::RecordError;

/// 32-byte content hash of a registration record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionRef([u8; 32]);

impl SubmissionRef {
    /// Wrap raw hash bytes
    #[inline]
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Hash arbitrary bytes
    #[inline]
    #[must_use]
    pub fn compute(data: &[u8]) -> Self {
        Self::new(*blake3::hash(data).as_bytes())
    }

    /// Raw bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Short form (first 16 hex chars), used in file names
    #[inline]
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

impl Display for SubmissionRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for SubmissionRef {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| RecordError::InvalidReference(e.to_string()))?;
        let arr: [u8; 32] = bytes.try_into().map_err(|b: Vec<u8>| {
            RecordError::InvalidReference(format!("expected 32 bytes, got {}", b.len()))
        })?;
        Ok(Self(arr))
    }
}

impl serde::Serialize for SubmissionRef {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_is_sixteen_hex_chars() {
        let reference = SubmissionRef::compute(b"record");
        assert_eq!(reference.short().len(), 16);
        assert!(reference.to_string().starts_with(&reference.short()));
    }

    #[test]
    fn parses_display_form() {
        let reference = SubmissionRef::compute(b"record");
        let parsed: SubmissionRef = reference.to_string().parse().unwrap();
        assert_eq!(parsed, reference);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!("abcd".parse::<SubmissionRef>().is_err());
        assert!("zz".parse::<SubmissionRef>().is_err());
    }
}
