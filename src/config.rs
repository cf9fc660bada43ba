//! Render configuration for the transcript normalizer.
//!
//! This module provides [`RenderConfig`], the options a normalization pass
//! runs with. The config is plain data without any CLI framework dependencies
//! and is rebuilt from the current form or flag values on every pass.
//!
//! # Lenient Field Parsing
//!
//! [`RenderConfig::from_fields`] accepts the raw strings a user typed and never
//! fails: unparseable values fall back to neutral defaults.
//!
//! | Field | Input | Result |
//! |-------|-------|--------|
//! | aliases | `""` | `"Usuario"` / `"Lucy"` |
//! | omit list | `"1, x, 3abc"` | `{1, 3}` |
//! | thought start/end | `"abc"` or `"-2"` | `0` |
//!
//! # Example
//!
//! ```rust
//! use chatclean::config::RenderConfig;
//!
//! let config = RenderConfig::new()
//!     .with_user_alias("Ana")
//!     .with_omitted([2, 5])
//!     .with_thought_window(1, 1);
//!
//! assert!(config.is_omitted(2));
//! assert_eq!(config.model_alias, "Lucy");
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Display name used for user turns when none is given.
pub const DEFAULT_USER_ALIAS: &str = "Usuario";

/// Display name used for model turns when none is given.
pub const DEFAULT_MODEL_ALIAS: &str = "Lucy";

/// Header used when none is given.
pub const DEFAULT_HEADER_TEMPLATE: &str =
    "TRANSCRIPCIÓN | Turnos: [TOTAL] | Omitidos: [OMITIDOS] | Pensamientos: [PENSAMIENTOS]";

/// Options for one normalization pass.
///
/// # Redaction
///
/// Indices in [`omit_list`](Self::omit_list) are per-role positions: `2`
/// redacts both the second user turn and the second model turn.
///
/// # Thought Window
///
/// Thoughts preceding the first [`thought_start`](Self::thought_start) model
/// turns and the last [`thought_end`](Self::thought_end) model turns are
/// rendered; all others are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Display name for user turns (default: "Usuario")
    pub user_alias: String,

    /// Display name for model turns (default: "Lucy")
    pub model_alias: String,

    /// Per-role turn indices (1-based) to redact
    pub omit_list: BTreeSet<u32>,

    /// Number of leading model turns whose thoughts are shown (default: 0)
    pub thought_start: u32,

    /// Number of trailing model turns whose thoughts are shown (default: 0)
    pub thought_end: u32,

    /// Header with `[TOTAL]`, `[OMITIDOS]` and `[PENSAMIENTOS]` placeholders
    pub header_template: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            user_alias: DEFAULT_USER_ALIAS.to_string(),
            model_alias: DEFAULT_MODEL_ALIAS.to_string(),
            omit_list: BTreeSet::new(),
            thought_start: 0,
            thought_end: 0,
            header_template: DEFAULT_HEADER_TEMPLATE.to_string(),
        }
    }
}

impl RenderConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a configuration from raw field values.
    ///
    /// Empty aliases fall back to their defaults. The omit list is split on
    /// commas and parsed with [`parse_omit_list`]; window bounds are parsed
    /// with [`parse_window_bound`]. The header template is taken as-is.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatclean::config::RenderConfig;
    ///
    /// let config = RenderConfig::from_fields("", "Bot", "1, two, 3", "2", "x", "[TOTAL]");
    /// assert_eq!(config.user_alias, "Usuario");
    /// assert_eq!(config.model_alias, "Bot");
    /// assert_eq!(config.omit_list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    /// assert_eq!((config.thought_start, config.thought_end), (2, 0));
    /// ```
    pub fn from_fields(
        user_alias: &str,
        model_alias: &str,
        omit: &str,
        thought_start: &str,
        thought_end: &str,
        header_template: &str,
    ) -> Self {
        Self {
            user_alias: alias_or(user_alias, DEFAULT_USER_ALIAS),
            model_alias: alias_or(model_alias, DEFAULT_MODEL_ALIAS),
            omit_list: parse_omit_list(omit),
            thought_start: parse_window_bound(thought_start),
            thought_end: parse_window_bound(thought_end),
            header_template: header_template.to_string(),
        }
    }

    /// Sets the user display name.
    #[must_use]
    pub fn with_user_alias(mut self, alias: impl Into<String>) -> Self {
        self.user_alias = alias.into();
        self
    }

    /// Sets the model display name.
    #[must_use]
    pub fn with_model_alias(mut self, alias: impl Into<String>) -> Self {
        self.model_alias = alias.into();
        self
    }

    /// Adds turn indices to redact.
    #[must_use]
    pub fn with_omitted(mut self, indices: impl IntoIterator<Item = u32>) -> Self {
        self.omit_list.extend(indices);
        self
    }

    /// Sets both bounds of the thought window.
    #[must_use]
    pub fn with_thought_window(mut self, start: u32, end: u32) -> Self {
        self.thought_start = start;
        self.thought_end = end;
        self
    }

    /// Sets the header template.
    #[must_use]
    pub fn with_header_template(mut self, template: impl Into<String>) -> Self {
        self.header_template = template.into();
        self
    }

    /// Returns `true` if turns at this per-role index are redacted.
    pub fn is_omitted(&self, index: u32) -> bool {
        self.omit_list.contains(&index)
    }
}

fn alias_or(alias: &str, fallback: &str) -> String {
    if alias.is_empty() {
        fallback.to_string()
    } else {
        alias.to_string()
    }
}

/// Parses a comma-separated list of turn indices.
///
/// Each piece is trimmed and read by its leading integer (`"3abc"` is 3).
/// Pieces with no leading integer, and values below 1, are dropped silently.
pub fn parse_omit_list(input: &str) -> BTreeSet<u32> {
    input
        .split(',')
        .filter_map(parse_leading_int)
        .filter_map(|n| u32::try_from(n).ok())
        .filter(|&n| n >= 1)
        .collect()
}

/// Parses a thought-window bound, falling back to 0.
///
/// Unparseable or negative input yields 0.
pub fn parse_window_bound(input: &str) -> u32 {
    parse_leading_int(input)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

/// Reads an optional sign followed by decimal digits from the start of the
/// trimmed input, ignoring anything after them.
fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    // Saturate absurdly long inputs instead of rejecting them
    let value = rest[..digits_end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}
