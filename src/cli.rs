//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! Numeric options are taken as raw strings and parsed leniently by
//! [`RenderConfig::from_fields`], the same way form fields are: a typo never
//! aborts the run, it falls back to a neutral value.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_HEADER_TEMPLATE, RenderConfig};

/// Clean AI Studio chat exports into readable transcripts,
/// with turn redaction and optional model thoughts.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatclean")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatclean chat.json
    chatclean chat.json -o transcript.pdf
    chatclean chat.json -f json
    chatclean chat.json --omit 2,5 --thought-start 1 --thought-end 2
    chatclean chat.json --user Ana --model Bot --stdout
    chatclean export.txt --header \"Turnos: [TOTAL] / Omitidos: [OMITIDOS]\"")]
pub struct Args {
    /// Path to the exported conversation (any extension, JSON content)
    pub input: String,

    /// Path to output file [default: chat_clean_<unix-millis>.<ext>]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format [default: from the --output extension, else txt]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Display name for user turns
    #[arg(long = "user", value_name = "NAME", default_value = "")]
    pub user_alias: String,

    /// Display name for model turns
    #[arg(long = "model", value_name = "NAME", default_value = "")]
    pub model_alias: String,

    /// Comma-separated per-role turn indices to redact (e.g. "2,5")
    #[arg(long, value_name = "LIST", default_value = "")]
    pub omit: String,

    /// Show thoughts before the first N model turns
    #[arg(long, value_name = "N", default_value = "0", allow_hyphen_values = true)]
    pub thought_start: String,

    /// Show thoughts before the last N model turns
    #[arg(long, value_name = "N", default_value = "0", allow_hyphen_values = true)]
    pub thought_end: String,

    /// Header template; [TOTAL], [OMITIDOS] and [PENSAMIENTOS] are substituted
    #[arg(long, value_name = "TEMPLATE", default_value = DEFAULT_HEADER_TEMPLATE)]
    pub header: String,

    /// Print the transcript to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Args {
    /// Rebuilds the render configuration from the raw option values.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::from_fields(
            &self.user_alias,
            &self.model_alias,
            &self.omit,
            &self.thought_start,
            &self.thought_end,
            &self.header,
        )
    }

    /// Resolves the output format.
    ///
    /// An explicit `--format` wins. Otherwise the `--output` extension decides,
    /// and anything unrecognized falls back to plain text.
    pub fn output_format(&self) -> crate::format::OutputFormat {
        if let Some(format) = self.format {
            return format.into();
        }
        match self.output.as_deref().map(crate::format::OutputFormat::from_path) {
            Some(Ok(format)) => format,
            Some(Err(e)) => {
                tracing::debug!(error = %e, "output extension not recognized, writing text");
                crate::format::OutputFormat::Txt
            }
            None => crate::format::OutputFormat::Txt,
        }
    }
}

/// Output format options.
///
/// - [`Txt`](OutputFormat::Txt) - Plain text (default)
/// - [`Pdf`](OutputFormat::Pdf) - Paginated A4 document
/// - [`Json`](OutputFormat::Json) - Structured turns and statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text
    #[default]
    #[value(alias = "text")]
    Txt,

    /// Paginated PDF
    Pdf,

    /// JSON
    Json,
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

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Txt => crate::format::OutputFormat::Txt,
            OutputFormat::Pdf => crate::format::OutputFormat::Pdf,
            OutputFormat::Json => crate::format::OutputFormat::Json,
        }
    }
}
