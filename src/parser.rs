//! Loader for AI Studio conversation exports.
//!
//! This module turns raw bytes into a validated [`Document`]. Loading is the
//! only step that can reject input; once a [`Document`] exists the normalizer
//! can always process it.
//!
//! # Expected Structure
//!
//! ```json
//! {
//!   "runSettings": {"model": "models/gemini-2.5-pro"},
//!   "systemInstruction": {"text": "..."},
//!   "chunkedPrompt": {
//!     "chunks": [
//!       {"role": "user", "text": "Hello"},
//!       {"role": "model", "text": "Thinking...", "isThought": true},
//!       {"role": "model", "text": "Hi!"}
//!     ]
//!   }
//! }
//! ```
//!
//! Only `chunkedPrompt.chunks` is required. Entries inside it are read
//! leniently: a field of the wrong type reads as its default and an entry
//! that is not an object is kept as a chunk the normalizer skips.
//!
//! # Example
//!
//! ```rust
//! # fn main() -> chatclean::Result<()> {
//! use chatclean::parser::load;
//!
//! let doc = load(br#"{"chunkedPrompt": {"chunks": [{"role": "user", "text": "Hi"}]}}"#)?;
//! assert_eq!(doc.chunks.len(), 1);
//!
//! let err = load(br#"{"messages": []}"#).unwrap_err();
//! assert!(err.is_invalid_format());
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::chunk::{Chunk, Role};
use crate::error::{ChatcleanError, Result};

/// Dotted path of the required chunk container.
pub const CHUNKS_PATH: &str = "chunkedPrompt.chunks";

/// A validated conversation export.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// The conversation, in export order.
    pub chunks: Vec<Chunk>,

    /// Model name from `runSettings.model`, if present.
    pub model: Option<String>,

    /// System instruction text, if present and non-empty.
    pub system_instruction: Option<String>,
}

impl Document {
    /// Returns the number of chunks with the given role.
    pub fn count_role(&self, role: Role) -> usize {
        self.chunks.iter().filter(|c| c.role == role).count()
    }

    /// Returns `true` if the export has no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct RunSettings {
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SystemInstruction {
    text: Option<String>,
    parts: Option<Vec<crate::chunk::Part>>,
}

/// Loads a document from raw bytes.
///
/// The bytes are always decoded as text, whatever file they came from;
/// invalid UTF-8 sequences become U+FFFD instead of failing.
pub fn load(bytes: &[u8]) -> Result<Document> {
    parse_document(&String::from_utf8_lossy(bytes), None)
}

/// Loads a document from a string.
pub fn load_str(content: &str) -> Result<Document> {
    parse_document(content, None)
}

/// Loads a document from a file on disk.
///
/// Parse errors carry the file path.
pub fn load_path(path: &Path) -> Result<Document> {
    let bytes = fs::read(path)?;
    parse_document(&String::from_utf8_lossy(&bytes), Some(path))
}

fn parse_document(content: &str, path: Option<&Path>) -> Result<Document> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut root: Value = serde_json::from_str(content)
        .map_err(|e| ChatcleanError::aistudio_parse(e, path.map(Path::to_path_buf)))?;

    let items = match root
        .get_mut("chunkedPrompt")
        .and_then(|prompt| prompt.get_mut("chunks"))
        .map(Value::take)
    {
        Some(Value::Array(items)) => items,
        _ => return Err(ChatcleanError::missing_container(CHUNKS_PATH)),
    };

    let skipped = items.iter().filter(|item| !item.is_object()).count();
    let chunks: Vec<Chunk> = items.into_iter().map(Chunk::from_value).collect();

    let model = root
        .get_mut("runSettings")
        .map(Value::take)
        .and_then(|v| serde_json::from_value::<RunSettings>(v).ok())
        .and_then(|s| s.model);

    let system_instruction = root
        .get_mut("systemInstruction")
        .map(Value::take)
        .and_then(|v| serde_json::from_value::<SystemInstruction>(v).ok())
        .and_then(|si| match si.parts {
            Some(parts) => Some(parts.into_iter().map(|p| p.text).collect::<String>()),
            None => si.text,
        })
        .filter(|text| !text.trim().is_empty());

    tracing::debug!(
        chunks = chunks.len(),
        skipped,
        model = model.as_deref().unwrap_or("unknown"),
        "loaded conversation export"
    );

    Ok(Document {
        chunks,
        model,
        system_instruction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_minimal() {
        let doc = load_str(r#"{"chunkedPrompt":{"chunks":[]}}"#).unwrap();
        assert!(doc.is_empty());
        assert!(doc.model.is_none());
        assert!(doc.system_instruction.is_none());
    }

    #[test]
    fn test_load_full() {
        let json = r#"{
            "runSettings": {"model": "models/gemini-2.5-pro", "temperature": 1},
            "systemInstruction": {"text": "Be nice"},
            "chunkedPrompt": {"chunks": [
                {"role": "user", "text": "Hi"},
                {"role": "model", "text": "Hmm", "isThought": true},
                {"role": "model", "parts": [{"text": "Hello"}]}
            ], "pendingInputs": []}
        }"#;
        let doc = load_str(json).unwrap();
        assert_eq!(doc.chunks.len(), 3);
        assert_eq!(doc.count_role(Role::Model), 2);
        assert_eq!(doc.count_role(Role::User), 1);
        assert_eq!(doc.model.as_deref(), Some("models/gemini-2.5-pro"));
        assert_eq!(doc.system_instruction.as_deref(), Some("Be nice"));
    }

    #[test]
    fn test_system_instruction_from_parts() {
        let json = r#"{"systemInstruction":{"parts":[{"text":"A"},{"text":"B"}]},"chunkedPrompt":{"chunks":[]}}"#;
        let doc = load_str(json).unwrap();
        assert_eq!(doc.system_instruction.as_deref(), Some("AB"));
    }

    #[test]
    fn test_empty_system_instruction_is_none() {
        let json = r#"{"systemInstruction":{},"chunkedPrompt":{"chunks":[]}}"#;
        assert!(load_str(json).unwrap().system_instruction.is_none());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = load_str("{not json").unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_missing_container_is_structural_error() {
        for json in [
            r#"{}"#,
            r#"{"chunkedPrompt":{}}"#,
            r#"{"chunkedPrompt":null}"#,
            r#"{"chunkedPrompt":{"chunks":null}}"#,
            r#"{"chunkedPrompt":{"chunks":{"0":{}}}}"#,
            r#"[1,2,3]"#,
        ] {
            let err = load_str(json).unwrap_err();
            assert!(err.is_invalid_format(), "expected structural error for {json}");
            assert!(err.to_string().contains("chunkedPrompt.chunks"));
        }
    }

    #[test]
    fn test_bad_chunk_shape_still_loads() {
        let doc = load_str(r#"{"chunkedPrompt":{"chunks":[{"role":"user","text":42}, 7]}}"#)
            .unwrap();
        assert_eq!(doc.chunks.len(), 2);
        assert_eq!(doc.chunks[0].role, Role::User);
        assert!(doc.chunks[0].text.is_none());
        assert_eq!(doc.chunks[1].kind(), crate::chunk::ChunkKind::Ignored);
    }

    #[test]
    fn test_load_bytes_lossy_and_bom() {
        let mut bytes = "\u{feff}".as_bytes().to_vec();
        bytes.extend_from_slice(br#"{"chunkedPrompt":{"chunks":[{"role":"user","text":"a"#);
        bytes.push(0xff);
        bytes.extend_from_slice(br#""}]}}"#);

        let doc = load(&bytes).unwrap();
        assert_eq!(doc.chunks[0].text.as_deref(), Some("a\u{fffd}"));
    }

    #[test]
    fn test_load_path_attaches_path_to_errors() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "definitely not json").unwrap();

        let err = load_path(file.path()).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_load_path_missing_file_is_io() {
        let err = load_path(Path::new("/nonexistent/chat.json")).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_extension_is_irrelevant() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, r#"{{"chunkedPrompt":{{"chunks":[{{"role":"model","text":"ok"}}]}}}}"#)
            .unwrap();
        let doc = load_path(file.path()).unwrap();
        assert_eq!(doc.chunks.len(), 1);
    }
}
