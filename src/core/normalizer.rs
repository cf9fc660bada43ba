//! Transcript normalization.
//!
//! This module turns a chunk sequence into a clean, pair-indexed transcript.
//! It is a single synchronous pass with no error path: the same document and
//! configuration always produce byte-identical output.
//!
//! # Algorithm
//!
//! 1. Count model responses up front; the "last N" thought window is measured
//!    against this number, never against the running counter.
//! 2. Walk the chunks in order:
//!    - thought chunks append their trimmed text to a pending buffer;
//!    - user turns clear the buffer;
//!    - model turns consume the buffer, rendering it only when the turn falls
//!      inside the thought window;
//!    - turns whose per-role index is in the omit list render a placeholder
//!      and also clear the buffer.
//! 3. Substitute statistics into the header and join everything.
//!
//! # Example
//!
//! ```
//! use chatclean::chunk::Chunk;
//! use chatclean::config::RenderConfig;
//! use chatclean::core::normalizer::normalize_chunks;
//!
//! let chunks = vec![
//!     Chunk::model_thought("reasoning A"),
//!     Chunk::model("answer 1"),
//!     Chunk::user("question 2"),
//! ];
//! let config = RenderConfig::new().with_thought_window(1, 0);
//!
//! let transcript = normalize_chunks(&chunks, &config);
//! assert_eq!(
//!     transcript.turns[0].to_string(),
//!     "Lucy 0001:\n[PENSAMIENTO]:\nreasoning A\n\n[RESPUESTA]:\nanswer 1"
//! );
//! assert_eq!(transcript.turns[1].to_string(), "Usuario 0001:\nquestion 2");
//! assert_eq!(transcript.stats.thoughts, 1);
//! ```

use super::models::{RenderedTurn, Transcript, TranscriptStats};
use crate::chunk::{Chunk, ChunkKind};
use crate::config::RenderConfig;
use crate::parser::Document;

/// Body of a redacted turn.
pub const OMITTED_PLACEHOLDER: &str = "[MENSAJE OMITIDO]";

/// Line introducing a rendered thought.
pub const THOUGHT_MARKER: &str = "[PENSAMIENTO]:";

/// Line introducing the answer after a rendered thought.
pub const RESPONSE_MARKER: &str = "[RESPUESTA]:";

/// Header placeholder for the pair count.
pub const TOTAL_TOKEN: &str = "[TOTAL]";

/// Header placeholder for the redacted-turn count.
pub const OMITTED_TOKEN: &str = "[OMITIDOS]";

/// Header placeholder for the rendered-thought count.
pub const THOUGHTS_TOKEN: &str = "[PENSAMIENTOS]";

const SEPARATOR_WIDTH: usize = 40;

/// Normalizes a loaded document.
pub fn normalize(document: &Document, config: &RenderConfig) -> Transcript {
    normalize_chunks(&document.chunks, config)
}

/// Normalizes a raw chunk sequence.
pub fn normalize_chunks(chunks: &[Chunk], config: &RenderConfig) -> Transcript {
    let total_model_responses = chunks.iter().filter(|c| c.is_model_response()).count() as u32;
    let window = ThoughtWindow::new(config, total_model_responses);

    let mut count_user: u32 = 0;
    let mut count_model: u32 = 0;
    let mut pending_thought = String::new();
    let mut stats = TranscriptStats::default();
    let mut turns = Vec::new();

    for chunk in chunks {
        let (alias, index) = match chunk.kind() {
            ChunkKind::Thought => {
                let text = chunk.text_content();
                let text = text.trim();
                if !text.is_empty() {
                    pending_thought.push_str(text);
                    pending_thought.push('\n');
                }
                continue;
            }
            ChunkKind::Ignored => {
                tracing::trace!(role = %chunk.role, "skipping non-turn chunk");
                continue;
            }
            ChunkKind::User => {
                count_user += 1;
                if !pending_thought.is_empty() {
                    tracing::trace!(user_turn = count_user, "discarding thought before user turn");
                }
                pending_thought.clear();
                (&config.user_alias, count_user)
            }
            ChunkKind::Model => {
                count_model += 1;
                (&config.model_alias, count_model)
            }
        };

        let label = format!("{} {:04}", alias, index);

        if config.is_omitted(index) {
            turns.push(RenderedTurn::new(label, OMITTED_PLACEHOLDER));
            stats.omitted += 1;
            pending_thought.clear();
            continue;
        }

        let main_text = chunk.text_content();
        let main_text = main_text.trim();
        let mut body = String::new();

        // Only model turns can reach here with a pending thought
        if !pending_thought.is_empty() {
            if window.contains(count_model) {
                body.push_str(THOUGHT_MARKER);
                body.push('\n');
                body.push_str(&pending_thought);
                body.push('\n');
                body.push_str(RESPONSE_MARKER);
                body.push('\n');
                stats.thoughts += 1;
            } else {
                tracing::trace!(model_turn = count_model, "thought outside window, dropped");
            }
            pending_thought.clear();
        }

        body.push_str(main_text);
        turns.push(RenderedTurn::new(label, body));
    }

    stats.total_pairs = count_user.max(count_model);

    let header_text = render_header(&config.header_template, &stats);
    let full_text = render_full_text(&header_text, &turns);

    tracing::debug!(
        chunks = chunks.len(),
        turns = turns.len(),
        total_pairs = stats.total_pairs,
        omitted = stats.omitted,
        thoughts = stats.thoughts,
        "normalized transcript"
    );

    Transcript {
        turns,
        stats,
        header_text,
        full_text,
    }
}

/// Substitutes statistics into a header template.
///
/// Each placeholder is replaced once, at its first occurrence.
///
/// ```
/// use chatclean::core::normalizer::render_header;
/// use chatclean::core::TranscriptStats;
///
/// let header = render_header(
///     "Total: [TOTAL], Omitted: [OMITIDOS], Thoughts: [PENSAMIENTOS]",
///     &TranscriptStats::new(3, 1, 0),
/// );
/// assert_eq!(header, "Total: 3, Omitted: 1, Thoughts: 0");
/// ```
pub fn render_header(template: &str, stats: &TranscriptStats) -> String {
    template
        .replacen(TOTAL_TOKEN, &stats.total_pairs.to_string(), 1)
        .replacen(OMITTED_TOKEN, &stats.omitted.to_string(), 1)
        .replacen(THOUGHTS_TOKEN, &stats.thoughts.to_string(), 1)
}

fn render_full_text(header: &str, turns: &[RenderedTurn]) -> String {
    let body = turns
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("{}\n\n{}\n\n{}", header, "-".repeat(SEPARATOR_WIDTH), body)
}

/// Which model turns may show the thought preceding them.
#[derive(Debug, Clone, Copy)]
struct ThoughtWindow {
    first: u32,
    last_after: u32,
}

impl ThoughtWindow {
    fn new(config: &RenderConfig, total_model_responses: u32) -> Self {
        Self {
            first: config.thought_start,
            // Turns past this index belong to the trailing window
            last_after: total_model_responses.saturating_sub(config.thought_end),
        }
    }

    fn contains(self, model_index: u32) -> bool {
        model_index <= self.first || model_index > self.last_after
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::{Part, Role};

    fn bodies(transcript: &Transcript) -> Vec<&str> {
        transcript.turns.iter().map(|t| t.body.as_str()).collect()
    }

    fn labels(transcript: &Transcript) -> Vec<&str> {
        transcript.turns.iter().map(|t| t.label.as_str()).collect()
    }

    #[test]
    fn test_simple_conversation() {
        let chunks = vec![
            Chunk::user("  Hola  "),
            Chunk::model("Hola, ¿qué tal?\n"),
            Chunk::user("Bien"),
        ];
        let t = normalize_chunks(&chunks, &RenderConfig::default());

        assert_eq!(labels(&t), vec!["Usuario 0001", "Lucy 0001", "Usuario 0002"]);
        assert_eq!(bodies(&t), vec!["Hola", "Hola, ¿qué tal?", "Bien"]);
        assert_eq!(t.stats, TranscriptStats::new(2, 0, 0));
    }

    #[test]
    fn test_aliases_and_padding() {
        let chunks: Vec<Chunk> = (0..12).map(|i| Chunk::model(format!("m{i}"))).collect();
        let config = RenderConfig::new().with_model_alias("Bot");
        let t = normalize_chunks(&chunks, &config);
        assert_eq!(t.turns[0].label, "Bot 0001");
        assert_eq!(t.turns[11].label, "Bot 0012");
    }

    #[test]
    fn test_omit_redacts_both_roles() {
        let chunks = vec![
            Chunk::user("u1"),
            Chunk::model("m1"),
            Chunk::user("u2"),
            Chunk::model("m2"),
            Chunk::user("u3"),
        ];
        let t = normalize_chunks(&chunks, &RenderConfig::new().with_omitted([2]));

        assert_eq!(
            bodies(&t),
            vec!["u1", "m1", OMITTED_PLACEHOLDER, OMITTED_PLACEHOLDER, "u3"]
        );
        assert_eq!(t.stats.omitted, 2);
        assert_eq!(t.stats.total_pairs, 3);
    }

    #[test]
    fn test_omitted_model_turn_consumes_thought() {
        let chunks = vec![
            Chunk::model_thought("secret"),
            Chunk::model("m1"),
            Chunk::model("m2"),
        ];
        let config = RenderConfig::new().with_omitted([1]).with_thought_window(5, 5);
        let t = normalize_chunks(&chunks, &config);

        assert_eq!(bodies(&t), vec![OMITTED_PLACEHOLDER, "m2"]);
        assert_eq!(t.stats.thoughts, 0);
        assert!(!t.full_text.contains("secret"));
    }

    #[test]
    fn test_thought_window_first_and_last() {
        let mut chunks = Vec::new();
        for i in 1..=5 {
            chunks.push(Chunk::model_thought(format!("t{i}")));
            chunks.push(Chunk::model(format!("a{i}")));
        }
        let t = normalize_chunks(&chunks, &RenderConfig::new().with_thought_window(1, 1));

        assert_eq!(t.stats.thoughts, 2);
        assert!(t.turns[0].body.contains("t1"));
        assert!(t.turns[4].body.contains("t5"));
        for turn in &t.turns[1..4] {
            assert!(!turn.body.contains(THOUGHT_MARKER));
        }
        assert_eq!(t.turns[2].body, "a3");
    }

    #[test]
    fn test_thought_window_end_larger_than_total() {
        let chunks = vec![Chunk::model_thought("t"), Chunk::model("a")];
        let t = normalize_chunks(&chunks, &RenderConfig::new().with_thought_window(0, 10));
        assert_eq!(t.stats.thoughts, 1);
    }

    #[test]
    fn test_thoughts_hidden_by_default() {
        let chunks = vec![Chunk::model_thought("t"), Chunk::model("a")];
        let t = normalize_chunks(&chunks, &RenderConfig::default());
        assert_eq!(bodies(&t), vec!["a"]);
        assert_eq!(t.stats.thoughts, 0);
    }

    #[test]
    fn test_thought_discarded_by_user_turn() {
        let chunks = vec![
            Chunk::model_thought("stale"),
            Chunk::user("q"),
            Chunk::model("a"),
        ];
        let t = normalize_chunks(&chunks, &RenderConfig::new().with_thought_window(9, 9));
        assert_eq!(bodies(&t), vec!["q", "a"]);
        assert_eq!(t.stats.thoughts, 0);
        assert!(!t.full_text.contains("stale"));
    }

    #[test]
    fn test_multiple_thoughts_accumulate() {
        let chunks = vec![
            Chunk::model_thought("  first  "),
            Chunk::model_thought("   "),
            Chunk::model_thought("second"),
            Chunk::model("answer"),
        ];
        let t = normalize_chunks(&chunks, &RenderConfig::new().with_thought_window(1, 0));
        assert_eq!(
            t.turns[0].body,
            "[PENSAMIENTO]:\nfirst\nsecond\n\n[RESPUESTA]:\nanswer"
        );
        assert_eq!(t.stats.thoughts, 1);
    }

    #[test]
    fn test_thought_part_defers_whole_chunk() {
        let chunks = vec![
            Chunk::model_parts(vec![Part::thought("plan "), Part::new("visible")]),
            Chunk::model("final"),
        ];
        let t = normalize_chunks(&chunks, &RenderConfig::new().with_thought_window(1, 0));

        assert_eq!(t.turns.len(), 1);
        assert_eq!(t.turns[0].label, "Lucy 0001");
        assert_eq!(
            t.turns[0].body,
            "[PENSAMIENTO]:\nplan visible\n\n[RESPUESTA]:\nfinal"
        );
    }

    #[test]
    fn test_window_denominator_counts_part_thought_chunks() {
        // The parts-only thought chunk counts as a model response, so the
        // window of 1 trailing turn starts after index 2 and "a1" misses it.
        let chunks = vec![
            Chunk::model_parts(vec![Part::thought("t")]),
            Chunk::model("a1"),
        ];
        let t = normalize_chunks(&chunks, &RenderConfig::new().with_thought_window(0, 1));
        assert_eq!(bodies(&t), vec!["a1"]);
        assert_eq!(t.stats.thoughts, 0);
    }

    #[test]
    fn test_other_roles_skipped() {
        let chunks = vec![
            Chunk::model_thought("kept"),
            Chunk::new(Role::Other, "system prompt"),
            Chunk::model("a"),
        ];
        let t = normalize_chunks(&chunks, &RenderConfig::new().with_thought_window(1, 0));
        assert_eq!(t.turns.len(), 1);
        assert!(t.turns[0].body.contains("kept"));
        assert!(!t.full_text.contains("system prompt"));
    }

    #[test]
    fn test_empty_turn_is_emitted() {
        let chunks = vec![Chunk::user("   "), Chunk::model("a")];
        let t = normalize_chunks(&chunks, &RenderConfig::default());
        assert_eq!(bodies(&t), vec!["", "a"]);
    }

    #[test]
    fn test_trailing_thought_is_dropped() {
        let chunks = vec![Chunk::model("a"), Chunk::model_thought("never answered")];
        let t = normalize_chunks(&chunks, &RenderConfig::new().with_thought_window(9, 9));
        assert_eq!(t.turns.len(), 1);
        assert!(!t.full_text.contains("never answered"));
    }

    #[test]
    fn test_render_header_first_occurrence_only() {
        let stats = TranscriptStats::new(3, 1, 0);
        assert_eq!(
            render_header("[TOTAL]/[TOTAL] [OMITIDOS] [PENSAMIENTOS]", &stats),
            "3/[TOTAL] 1 0"
        );
        assert_eq!(render_header("no tokens", &stats), "no tokens");
        assert_eq!(render_header("", &stats), "");
    }

    #[test]
    fn test_full_text_layout() {
        let chunks = vec![Chunk::user("q"), Chunk::model("a")];
        let config = RenderConfig::new().with_header_template("Total: [TOTAL]");
        let t = normalize_chunks(&chunks, &config);

        let expected = format!(
            "Total: 1\n\n{}\n\nUsuario 0001:\nq\n\nLucy 0001:\na",
            "-".repeat(40)
        );
        assert_eq!(t.full_text, expected);
        assert_eq!(t.header_text, "Total: 1");
    }

    #[test]
    fn test_empty_document() {
        let t = normalize(&Document::default(), &RenderConfig::new().with_header_template("H"));
        assert!(t.is_empty());
        assert_eq!(t.stats, TranscriptStats::default());
        assert_eq!(t.full_text, format!("H\n\n{}\n\n", "-".repeat(40)));
    }

    #[test]
    fn test_idempotent() {
        let chunks = vec![
            Chunk::model_thought("t"),
            Chunk::model("a"),
            Chunk::user("q"),
            Chunk::model("b"),
        ];
        let config = RenderConfig::new().with_thought_window(1, 1).with_omitted([2]);
        assert_eq!(
            normalize_chunks(&chunks, &config),
            normalize_chunks(&chunks, &config)
        );
    }
}
