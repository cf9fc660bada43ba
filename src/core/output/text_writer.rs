//! Plain-text output writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::Transcript;
use crate::error::Result;

/// MIME type of the plain-text sink.
pub const TEXT_MIME: &str = "text/plain";

/// Writes the transcript's full text to a file, byte for byte.
pub fn write_text(transcript: &Transcript, output_path: &str) -> Result<()> {
    let mut file = File::create(output_path)?;
    file.write_all(to_text(transcript).as_bytes())?;
    Ok(())
}

/// Returns the transcript's full text.
///
/// Same content as `write_text`, but returned as a String instead of written
/// to a file.
pub fn to_text(transcript: &Transcript) -> String {
    transcript.full_text.clone()
}
