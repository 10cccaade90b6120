//! Application input files
//!
//! The decoder is picked from the file extension: `json`, `yaml`/`yml` or
//! `toml`. Keys use the form's camelCase names.

use std::path::Path;

use enrol_schema::ApplicationInput;

use crate::error::EnrolError;

/// Supported input encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON object
    Json,
    /// YAML mapping
    Yaml,
    /// TOML table
    Toml,
}

impl InputFormat {
    /// Every format
    pub const ALL: [InputFormat; 3] = [Self::Json, Self::Yaml, Self::Toml];

    /// Extensions handled, without the dot
    #[must_use]
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Json => &["json"],
            Self::Yaml => &["yaml", "yml"],
            Self::Toml => &["toml"],
        }
    }

    /// Format for a path, by extension (case-insensitive)
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.extensions().contains(&ext.as_str()))
    }

    /// Decode text in this format
    ///
    /// # Errors
    /// Returns the decoder's message on malformed input
    pub fn decode(self, text: &str) -> Result<ApplicationInput, String> {
        match self {
            Self::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(text).map_err(|e| e.to_string()),
        }
    }
}

/// Read an application from a file
///
/// # Errors
/// Returns error if the extension is unknown, the file cannot be read or
/// its content does not decode
pub fn load_input(path: &Path) -> Result<ApplicationInput, EnrolError> {
    let format = InputFormat::from_path(path).ok_or_else(|| EnrolError::UnsupportedInput {
        path: path.to_path_buf(),
    })?;
    let text = std::fs::read_to_string(path).map_err(|e| EnrolError::io(path, e))?;
    let input = format.decode(&text).map_err(|message| EnrolError::InputDecode {
        path: path.to_path_buf(),
        message,
    })?;
    tracing::debug!(path = %path.display(), ?format, "input loaded");
    Ok(input)
}
