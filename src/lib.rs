//! # Chatclean
//!
//! A Rust library for turning AI Studio chat exports into clean,
//! human-readable transcripts.
//!
//! ## Overview
//!
//! An export is a sequence of "chunks": user turns, model turns, and
//! fragments of the model's internal reasoning ("thoughts"). Chatclean:
//!
//! - numbers turns per role (`Usuario 0001`, `Lucy 0001`, ...)
//! - redacts turns by their per-role index
//! - reattaches thoughts to the model turn that follows them, showing only
//!   those inside a window of first/last model turns
//! - renders a header with statistics and writes text, PDF or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use chatclean::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let export = r#"{"chunkedPrompt": {"chunks": [
//!         {"role": "user", "text": "Hola"},
//!         {"role": "model", "text": "Pensando...", "isThought": true},
//!         {"role": "model", "text": "¡Hola!"}
//!     ]}}"#.as_bytes();
//!
//!     let document = load(export)?;
//!     let config = RenderConfig::new().with_thought_window(1, 0);
//!     let transcript = normalize(&document, &config);
//!
//!     assert_eq!(transcript.stats.thoughts, 1);
//!     assert!(transcript.full_text.contains("[PENSAMIENTO]:\nPensando..."));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`chunk`] — Input records ([`Chunk`](chunk::Chunk), [`Role`](chunk::Role), [`ChunkKind`](chunk::ChunkKind))
//! - [`parser`] — Loader: bytes → validated [`Document`](parser::Document)
//! - [`config`] — [`RenderConfig`](config::RenderConfig) and lenient field parsing
//! - [`core`] — Core types and functionality
//!   - [`core::normalizer`] — [`normalize`](core::normalize), [`render_header`](core::render_header)
//!   - [`core::models`] — [`Transcript`](core::Transcript), [`RenderedTurn`](core::RenderedTurn), [`TranscriptStats`](core::TranscriptStats)
//!   - [`core::output`] — text, PDF and JSON sinks
//! - [`format`] — [`OutputFormat`](format::OutputFormat) and dispatch
//! - [`cli`] — CLI types (requires `cli` feature)
//! - [`error`] — Unified error types ([`ChatcleanError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

pub mod chunk;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod parser;

// Re-export the main types at the crate root for convenience
pub use error::{ChatcleanError, Result};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatclean::prelude::*;
/// ```
pub mod prelude {
    // Input model
    pub use crate::chunk::{Chunk, ChunkKind, Part, Role};

    // Error types
    pub use crate::error::{ChatcleanError, Result};

    // Loader
    pub use crate::parser::{Document, load, load_path, load_str};

    // Configuration
    pub use crate::config::RenderConfig;

    // Normalization
    pub use crate::core::{
        RenderedTurn, Transcript, TranscriptStats, normalize, normalize_chunks, render_header,
    };

    // Output (file writers and in-memory converters)
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};
    #[cfg(feature = "pdf-output")]
    pub use crate::core::output::{to_pdf, write_pdf};
    #[cfg(feature = "text-output")]
    pub use crate::core::output::{to_text, write_text};

    // Format dispatch
    pub use crate::format::{OutputFormat, write_to_format};
}
