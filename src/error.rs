//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Catalog lacks one or more required columns
    #[error("The CSV must contain the columns: {required}. Missing: {}", .missing.join(", "))]
    MissingColumns {
        /// Every required column, comma separated.
        required: String,
        /// The required columns not found in the header row.
        missing: Vec<String>,
    },

    /// File parsing error
    #[error("Parse error in {file:?}: {message}")]
    Parse {
        /// File that failed to parse, if known.
        file: Option<std::path::PathBuf>,
        /// Description of the parse failure.
        message: String,
    },

    /// No record with the requested sample identifier
    #[error("No record with sample_id {0}")]
    UnknownId(String),

    /// Image reference that cannot be displayed
    #[error("Invalid image reference: {0}")]
    Image(String),

    /// Clipboard access failure
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error with file context
    pub fn parse(message: impl Into<String>, file: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Parse { file: file.into(), message: message.into() }
    }

    /// Create a missing-columns error listing what was not found
    pub fn missing_columns(required: &[&str], missing: Vec<String>) -> Self {
        Self::MissingColumns {
            required: required.join(", "),
            missing,
        }
    }

    /// Create an image reference error
    pub fn image(message: impl Into<String>) -> Self {
        Self::Image(message.into())
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn missing_columns_lists_required_and_missing() {
        let err = Error::missing_columns(
            &["sample_id", "image_link", "catalog_content"],
            vec!["image_link".to_string()],
        );
        let msg = err.to_string();
        assert!(msg.contains("sample_id, image_link, catalog_content"));
        assert!(msg.ends_with("Missing: image_link"));
    }

    #[test]
    fn config_error_includes_hint() {
        let err = Error::config("file not found", "Set CATALOG_CSV");
        assert_eq!(err.to_string(), "Configuration error: file not found. Set CATALOG_CSV");
    }
}
