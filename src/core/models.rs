//! Output data models of a normalization pass.

use serde::Serialize;

/// One rendered user or model message.
///
/// `label` is the alias followed by the 4-digit per-role index, e.g.
/// `"Lucy 0003"`. Displays as `"label:\nbody"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTurn {
    /// Alias and zero-padded index
    pub label: String,
    /// Turn text, possibly prefixed with a rendered thought
    pub body: String,
}

impl RenderedTurn {
    pub fn new(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: body.into(),
        }
    }
}

impl std::fmt::Display for RenderedTurn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:\n{}", self.label, self.body)
    }
}

/// Aggregate counts of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TranscriptStats {
    /// Larger of the user and model turn counts
    pub total_pairs: u32,
    /// Redacted turns across both roles
    pub omitted: u32,
    /// Model turns that rendered a preceding thought
    pub thoughts: u32,
}

impl TranscriptStats {
    pub fn new(total_pairs: u32, omitted: u32, thoughts: u32) -> Self {
        Self {
            total_pairs,
            omitted,
            thoughts,
        }
    }
}

/// Result of normalizing a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    /// Rendered turns in input order
    pub turns: Vec<RenderedTurn>,
    /// Aggregate counts
    pub stats: TranscriptStats,
    /// Header template with placeholders substituted
    #[serde(rename = "header")]
    pub header_text: String,
    /// Header, separator and all turns, ready for a sink
    #[serde(skip)]
    pub full_text: String,
}

impl Transcript {
    /// Returns the number of rendered turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Returns `true` if no turn was rendered.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
