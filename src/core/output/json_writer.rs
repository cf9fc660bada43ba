//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::Transcript;
use crate::error::Result;

/// Writes the transcript to a JSON file.
///
/// # Format
/// ```json
/// {
///   "turns": [{"label": "Usuario 0001", "body": "Hola"}],
///   "stats": {"total_pairs": 1, "omitted": 0, "thoughts": 0},
///   "header": "..."
/// }
/// ```
pub fn write_json(transcript: &Transcript, output_path: &str) -> Result<()> {
    let json = to_json(transcript)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the transcript to a pretty-printed JSON string.
pub fn to_json(transcript: &Transcript) -> Result<String> {
    Ok(serde_json::to_string_pretty(transcript)?)
}
