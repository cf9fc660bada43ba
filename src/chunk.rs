//! Chunk records from an AI Studio conversation export.
//!
//! This module provides [`Chunk`], one element of the `chunkedPrompt.chunks`
//! sequence. A chunk is either a visible turn (user or model) or a fragment
//! of the model's internal reasoning ("thought").
//!
//! # Shapes
//!
//! A chunk carries its text in one of two forms:
//!
//! ```json
//! {"role": "user", "text": "Hello"}
//! {"role": "model", "parts": [{"text": "Thinking...", "thought": true}, {"text": "Hi"}]}
//! ```
//!
//! Thought content is marked either on the whole chunk (`isThought`) or on
//! individual parts (`thought`). [`Chunk::kind`] resolves both markings into a
//! single [`ChunkKind`] before any processing branches on it.
//!
//! # Examples
//!
//! ```
//! use chatclean::chunk::{Chunk, ChunkKind, Part};
//!
//! let answer = Chunk::model("42");
//! assert_eq!(answer.kind(), ChunkKind::Model);
//!
//! let reasoning = Chunk::model_parts(vec![Part::thought("Let me think"), Part::new("42")]);
//! assert_eq!(reasoning.kind(), ChunkKind::Thought);
//! assert_eq!(reasoning.text_content(), "Let me think42");
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Author of a chunk.
///
/// Only [`User`](Role::User) and [`Model`](Role::Model) produce turns. Any
/// other role string in the export (`system`, `tool`, ...) maps to
/// [`Other`](Role::Other) and is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The human side of the conversation.
    User,
    /// The AI model.
    Model,
    /// Anything else; never rendered.
    #[default]
    #[serde(other)]
    Other,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Model => write!(f, "model"),
            Role::Other => write!(f, "other"),
        }
    }
}

/// One text segment of a chunk.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Part {
    /// Segment text. Missing, `null` or non-string values read as empty.
    #[serde(default, deserialize_with = "lenient")]
    pub text: String,

    /// `true` when this segment is internal reasoning.
    #[serde(default, deserialize_with = "lenient")]
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub thought: bool,
}

impl Part {
    /// Creates a visible text part.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            thought: false,
        }
    }

    /// Creates a thought-marked part.
    pub fn thought(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            thought: true,
        }
    }
}

/// A single record of the source conversation.
///
/// Chunks are read-only input; the normalizer never mutates them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    /// Author of the chunk. Missing or unrecognized values read as [`Role::Other`].
    #[serde(default, deserialize_with = "lenient")]
    pub role: Role,

    /// Marks the whole chunk as internal reasoning.
    #[serde(default, deserialize_with = "lenient")]
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_thought: bool,

    /// Ordered text segments. Takes precedence over [`text`](Self::text) when present.
    /// Anything other than an array reads as absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default, deserialize_with = "lenient_parts")]
    pub parts: Option<Vec<Part>>,

    /// Flat text, used when `parts` is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,

    /// Token count reported by the export. Informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default, deserialize_with = "lenient")]
    pub token_count: Option<u64>,
}

/// Classification of a chunk, resolved once from its flags and role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkKind {
    /// Reasoning to defer to the next model turn.
    Thought,
    /// A visible user turn.
    User,
    /// A visible model turn.
    Model,
    /// Neither a turn nor a thought (system, tool, ...).
    Ignored,
}

impl Chunk {
    /// Creates a chunk with flat text.
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Reads a chunk from one entry of the chunk array.
    ///
    /// Fields with an unexpected type read as their defaults. An entry that
    /// is not an object becomes an empty chunk with no role, which the
    /// normalizer skips.
    pub fn from_value(value: Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }

    /// Creates a user chunk with flat text.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    /// Creates a model chunk with flat text.
    pub fn model(text: impl Into<String>) -> Self {
        Self::new(Role::Model, text)
    }

    /// Creates a model chunk flagged as a whole thought.
    pub fn model_thought(text: impl Into<String>) -> Self {
        Self::model(text).with_thought(true)
    }

    /// Creates a model chunk from parts.
    pub fn model_parts(parts: Vec<Part>) -> Self {
        Self {
            role: Role::Model,
            parts: Some(parts),
            ..Self::default()
        }
    }

    /// Builder method to set the whole-chunk thought flag.
    #[must_use]
    pub fn with_thought(mut self, is_thought: bool) -> Self {
        self.is_thought = is_thought;
        self
    }

    /// Builder method to replace the parts.
    #[must_use]
    pub fn with_parts(mut self, parts: Vec<Part>) -> Self {
        self.parts = Some(parts);
        self
    }

    /// Returns `true` if any part is thought-marked.
    pub fn has_thought_part(&self) -> bool {
        self.parts
            .as_ref()
            .is_some_and(|parts| parts.iter().any(|p| p.thought))
    }

    /// Resolves the chunk into a [`ChunkKind`].
    ///
    /// A chunk with `isThought` or with any thought-marked part is a
    /// [`ChunkKind::Thought`] as a whole, even if it also carries visible
    /// parts or a non-model role.
    pub fn kind(&self) -> ChunkKind {
        if self.is_thought || self.has_thought_part() {
            return ChunkKind::Thought;
        }
        match self.role {
            Role::User => ChunkKind::User,
            Role::Model => ChunkKind::Model,
            Role::Other => ChunkKind::Ignored,
        }
    }

    /// Returns `true` for model chunks that are not whole-chunk thoughts.
    ///
    /// This is the population the "last N" thought window counts over. A model
    /// chunk whose thought comes only from its parts still counts.
    pub fn is_model_response(&self) -> bool {
        self.role == Role::Model && !self.is_thought
    }

    /// Returns the untrimmed text of the chunk.
    ///
    /// Parts are concatenated with no separator; without parts the flat
    /// `text` is used, and a chunk with neither yields an empty string.
    pub fn text_content(&self) -> String {
        match &self.parts {
            Some(parts) => parts.iter().map(|p| p.text.as_str()).collect(),
            None => self.text.clone().unwrap_or_default(),
        }
    }
}

/// Reads a field of any JSON type, falling back to the default when the
/// value does not have the expected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

fn lenient_parts<'de, D>(deserializer: D) -> Result<Option<Vec<Part>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| Part::deserialize(item).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}
