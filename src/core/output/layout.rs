//! Monospaced page layout: word wrapping and pagination.
//!
//! Layout is independent of any document format. [`PageLayout::paginate`]
//! turns text into [`Page`]s of positioned lines, which a writer then
//! serializes.
//!
//! Defaults match an A4 page set in Courier 10 pt:
//!
//! | Setting | Value |
//! |---------|-------|
//! | Page | 210 × 297 mm |
//! | Side margins | 10 mm |
//! | First baseline | 15 mm from the top |
//! | Bottom limit | 10 mm from the bottom |
//! | Line pitch | 5 mm |
//! | Columns | 89 |

use serde::{Deserialize, Serialize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::error::{ChatcleanError, Result};

/// Advance width of a Courier glyph, in ems.
const MONOSPACE_ADVANCE_EM: f32 = 0.6;

const MM_PER_POINT: f32 = 25.4 / 72.0;

/// Geometry of a paginated document, in millimetres (font size in points).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub top: f32,
    pub line_height: f32,
    pub font_size: f32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 10.0,
            top: 15.0,
            line_height: 5.0,
            font_size: 10.0,
        }
    }
}

/// A line placed on a page. `y` is measured from the top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// One page of laid-out lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

impl PageLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.page_width = width;
        self.page_height = height;
        self
    }

    /// Sets the line pitch.
    #[must_use]
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Width available for text between the side margins.
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Number of monospaced columns that fit the content width.
    pub fn columns(&self) -> usize {
        let glyph_width = self.font_size * MONOSPACE_ADVANCE_EM * MM_PER_POINT;
        if glyph_width <= 0.0 || self.content_width() <= 0.0 {
            return 0;
        }
        (self.content_width() / glyph_width).floor() as usize
    }

    /// Lowest baseline a line may be drawn at before a page break.
    fn bottom_limit(&self) -> f32 {
        self.page_height - self.margin
    }

    fn validate(&self) -> Result<()> {
        if self.columns() == 0 {
            return Err(ChatcleanError::pdf("content width holds no characters"));
        }
        if self.line_height <= 0.0 {
            return Err(ChatcleanError::pdf("line height must be positive"));
        }
        if self.top > self.bottom_limit() {
            return Err(ChatcleanError::pdf("page height holds no lines"));
        }
        Ok(())
    }

    /// Wraps text to the layout's column count.
    ///
    /// Each `\n`-separated paragraph is wrapped greedily at spaces; words
    /// wider than a line are split across lines. Empty paragraphs are kept
    /// as empty lines.
    pub fn wrap(&self, text: &str) -> Result<Vec<String>> {
        self.validate()?;
        let columns = self.columns();
        Ok(text
            .split('\n')
            .flat_map(|paragraph| wrap_paragraph(paragraph.trim_end_matches('\r'), columns))
            .collect())
    }

    /// Wraps and paginates text.
    ///
    /// The cursor starts at `top` on every page and advances by
    /// `line_height`; a new page begins whenever the cursor has moved past
    /// the bottom limit.
    pub fn paginate(&self, text: &str) -> Result<Vec<Page>> {
        let lines = self.wrap(text)?;
        let mut pages = vec![Page::default()];
        let mut cursor_y = self.top;

        for line in lines {
            if cursor_y > self.bottom_limit() {
                pages.push(Page::default());
                cursor_y = self.top;
            }
            if let Some(page) = pages.last_mut() {
                page.lines.push(PlacedLine {
                    x: self.margin,
                    y: cursor_y,
                    text: line,
                });
            }
            cursor_y += self.line_height;
        }

        Ok(pages)
    }
}

fn wrap_paragraph(paragraph: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut width = 0;
    let mut started = false;

    for word in paragraph.split(' ') {
        let word_width = word.width();

        if started && width + 1 + word_width > columns {
            lines.push(std::mem::take(&mut current));
            width = 0;
            started = false;
        }

        if started {
            current.push(' ');
            width += 1;
            current.push_str(word);
            width += word_width;
        } else if word_width > columns {
            let mut pieces = split_to_width(word, columns);
            let last = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
            width = last.width();
            current = last;
        } else {
            current.push_str(word);
            width = word_width;
        }
        started = true;
    }

    lines.push(current);
    lines
}

fn split_to_width(word: &str, columns: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut width = 0;

    for c in word.chars() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > columns && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            width = 0;
        }
        piece.push(c);
        width += char_width;
    }

    pieces.push(piece);
    pieces
}
