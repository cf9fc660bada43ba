//! Output format types for the chatclean library.
//!
//! This module provides library-first format types that don't depend on CLI
//! frameworks.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "text-output")]
//! # fn example() -> chatclean::Result<()> {
//! use chatclean::chunk::Chunk;
//! use chatclean::config::RenderConfig;
//! use chatclean::core::normalize_chunks;
//! use chatclean::format::{OutputFormat, write_to_format};
//!
//! let transcript = normalize_chunks(&[Chunk::user("Hola")], &RenderConfig::new());
//!
//! // Write using format enum
//! write_to_format(&transcript, "chat.txt", OutputFormat::Txt)?;
//!
//! // Or use format detection from extension
//! let format = OutputFormat::from_path("chat.pdf")?;
//! assert_eq!(format, OutputFormat::Pdf);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::models::Transcript;
use crate::error::ChatcleanError;

/// Output format for cleaned transcripts.
///
/// - [`Txt`](OutputFormat::Txt) - The full text, verbatim
/// - [`Pdf`](OutputFormat::Pdf) - Paginated A4 document in a monospaced font
/// - [`Json`](OutputFormat::Json) - Turns, statistics and header as structured data
///
/// # Example
///
/// ```rust
/// use chatclean::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("pdf").unwrap();
/// assert_eq!(format, OutputFormat::Pdf);
/// assert_eq!(format.extension(), "pdf");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Plain text (default)
    #[default]
    Txt,

    /// Paginated PDF document
    Pdf,

    /// JSON object with turns, statistics and header
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatclean::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Txt.extension(), "txt");
    /// assert_eq!(OutputFormat::Pdf.extension(), "pdf");
    /// assert_eq!(OutputFormat::Json.extension(), "json");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["txt", "text", "pdf", "json"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Txt, OutputFormat::Pdf, OutputFormat::Json]
    }

    /// Returns the MIME type for this format.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatclean::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Txt.mime_type(), "text/plain");
    /// ```
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Txt => "text/plain",
            OutputFormat::Pdf => "application/pdf",
            OutputFormat::Json => "application/json",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatclean::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("chat_clean.PDF").unwrap();
    /// assert_eq!(format, OutputFormat::Pdf);
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ChatcleanError> {
        let Some(ext) = Path::new(path).extension().and_then(|ext| ext.to_str()) else {
            return Err(ChatcleanError::invalid_format(
                "output",
                format!("'{path}' has no file extension. Expected one of: txt, pdf, json"),
            ));
        };

        match ext.to_lowercase().as_str() {
            "txt" | "text" => Ok(OutputFormat::Txt),
            "pdf" => Ok(OutputFormat::Pdf),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ChatcleanError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: txt, pdf, json"),
            )),
        }
    }

    /// Returns the timestamped default file name, `chat_clean_<unix-millis>.<ext>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatclean::format::OutputFormat;
    /// use chrono::DateTime;
    ///
    /// let at = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
    /// assert_eq!(OutputFormat::Pdf.default_file_name(at), "chat_clean_1700000000123.pdf");
    /// ```
    pub fn default_file_name(&self, at: DateTime<Utc>) -> String {
        format!("chat_clean_{}.{}", at.timestamp_millis(), self.extension())
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Txt => write!(f, "TXT"),
            OutputFormat::Pdf => write!(f, "PDF"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" | "text" => Ok(OutputFormat::Txt),
            "pdf" => Ok(OutputFormat::Pdf),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

fn feature_for(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Txt => "text-output",
        OutputFormat::Pdf => "pdf-output",
        OutputFormat::Json => "json-output",
    }
}

fn feature_disabled(format: OutputFormat) -> ChatcleanError {
    ChatcleanError::invalid_format(
        "output",
        format!(
            "Output format {:?} requires the '{}' feature to be enabled",
            format,
            feature_for(format)
        ),
    )
}

/// Writes a transcript to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    transcript: &Transcript,
    path: &str,
    format: OutputFormat,
) -> Result<(), ChatcleanError> {
    tracing::debug!(%format, path, "writing transcript");
    match format {
        #[cfg(feature = "text-output")]
        OutputFormat::Txt => crate::core::output::write_text(transcript, path),
        #[cfg(feature = "pdf-output")]
        OutputFormat::Pdf => crate::core::output::write_pdf(transcript, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(transcript, path),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Renders a transcript to bytes in the specified format.
///
/// Useful when the caller hands the result to its own sink (a download,
/// an HTTP response) rather than a file.
#[allow(unused_variables)]
pub fn to_format_bytes(
    transcript: &Transcript,
    format: OutputFormat,
) -> Result<Vec<u8>, ChatcleanError> {
    match format {
        #[cfg(feature = "text-output")]
        OutputFormat::Txt => Ok(crate::core::output::to_text(transcript).into_bytes()),
        #[cfg(feature = "pdf-output")]
        OutputFormat::Pdf => crate::core::output::to_pdf(transcript),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(transcript).map(String::into_bytes),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}
