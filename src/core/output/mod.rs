//! Output sinks for a normalized transcript.
//!
//! This module provides writers for the supported outputs:
//! - [`write_text`] / [`to_text`] - the full text, verbatim - requires `text-output` feature
//! - [`write_pdf`] / [`to_pdf`] - paginated A4 document in Courier - requires `pdf-output` feature
//! - [`write_json`] / [`to_json`] - turns, statistics and header as JSON - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "text-output", feature = "pdf-output"))]
//! # fn main() -> chatclean::Result<()> {
//! use chatclean::chunk::Chunk;
//! use chatclean::config::RenderConfig;
//! use chatclean::core::normalize_chunks;
//! use chatclean::core::output::{to_text, write_pdf, write_text};
//!
//! let transcript = normalize_chunks(&[Chunk::user("Hola")], &RenderConfig::new());
//!
//! // Write to files
//! write_text(&transcript, "chat.txt")?;
//! write_pdf(&transcript, "chat.pdf")?;
//!
//! // Or get as a string
//! let text = to_text(&transcript);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "text-output", feature = "pdf-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "pdf-output")]
pub mod layout;
#[cfg(feature = "pdf-output")]
mod pdf_writer;
#[cfg(feature = "text-output")]
mod text_writer;

#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "pdf-output")]
pub use layout::{Page, PageLayout, PlacedLine};
#[cfg(feature = "pdf-output")]
pub use pdf_writer::{PDF_MIME, render_pdf, to_pdf, write_pdf};
#[cfg(feature = "text-output")]
pub use text_writer::{TEXT_MIME, to_text, write_text};
