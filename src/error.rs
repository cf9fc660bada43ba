//! Unified error types for chatclean.
//!
//! This module provides a single [`ChatcleanError`] enum that covers every
//! failure the library can report. Only loading and writing can fail:
//! normalization itself is infallible and always produces a transcript.
//!
//! # Error Taxonomy
//!
//! - **Parse**: the input bytes are not well-formed JSON
//! - **InvalidFormat**: well-formed JSON without the `chunkedPrompt.chunks` container
//! - **Io** / **Json** / **Pdf**: sink failures while writing output

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatclean operations.
///
/// # Example
///
/// ```rust
/// use chatclean::error::Result;
/// use chatclean::parser::Document;
///
/// fn my_function() -> Result<Document> {
///     chatclean::parser::load_str(r#"{"chunkedPrompt": {"chunks": []}}"#)
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatcleanError>;

/// The error type for all chatclean operations.
///
/// Each variant contains context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatcleanError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to parse the input as structured data.
    ///
    /// Contains the format being parsed, the underlying parse error,
    /// and optionally the file path.
    #[error("Failed to parse {format} export{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The format being parsed (e.g., "AI Studio JSON")
        format: &'static str,
        /// The underlying parse error
        #[source]
        source: ParseErrorKind,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// The document is well-formed but doesn't have the expected structure.
    ///
    /// Raised when the `chunkedPrompt.chunks` container is missing, or when
    /// an output path carries an unknown extension.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// JSON serialization error while writing the JSON sink.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The paginated document could not be produced.
    #[error("PDF error: {message}")]
    Pdf {
        /// Description of the failure
        message: String,
    },
}

/// Kinds of parse errors that can occur.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    /// JSON parsing error
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatcleanError {
    /// Creates a parse error for an AI Studio export.
    pub fn aistudio_parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        ChatcleanError::Parse {
            format: "AI Studio JSON",
            source: ParseErrorKind::Json(source),
            path,
        }
    }

    /// Creates the structural error raised when the chunk container is absent.
    pub fn missing_container(path: &str) -> Self {
        Self::invalid_format("AI Studio", format!("missing required container: {path}"))
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatcleanError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates a PDF rendering error.
    pub fn pdf(message: impl Into<String>) -> Self {
        ChatcleanError::Pdf {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatcleanError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatcleanError::Parse { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatcleanError::InvalidFormat { .. })
    }

    /// Returns `true` if this error means the input could not be loaded.
    ///
    /// Covers both malformed data and a missing chunk container.
    pub fn is_load_failure(&self) -> bool {
        self.is_parse() || self.is_invalid_format()
    }
}

// ============================================================================
// Tests
// ============================================================================
