//! Core processing logic for chatclean.
//!
//! This module contains:
//! - [`models`] - Rendered turns, statistics and the transcript
//! - [`normalizer`] - The chunk-to-transcript pass
//! - [`output`] - Sinks (plain text, PDF, JSON)
//!
//! # Quick Start
//!
//! ```rust
//! use chatclean::core::{RenderedTurn, Transcript, TranscriptStats, normalize, render_header};
//! ```

pub mod models;
pub mod normalizer;
pub mod output;

// Re-export main types for convenience
pub use models::{RenderedTurn, Transcript, TranscriptStats};
pub use normalizer::{normalize, normalize_chunks, render_header};

// Conditionally re-export output writers
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
#[cfg(feature = "pdf-output")]
pub use output::{to_pdf, write_pdf};
#[cfg(feature = "text-output")]
pub use output::{to_text, write_text};
