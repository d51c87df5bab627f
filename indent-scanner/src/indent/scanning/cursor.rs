//! Host cursor capability
//!
//!     The scanner reads input only through [`Cursor`]. A host provides the current character,
//!     consumption, a way to mark where the matched token ends, end-of-input and the column of
//!     the current position. Column computation, and with it the tab policy, belongs to the host.
//!
//!     [`SourceCursor`] is the string-backed host used by the driver, the CLI and the tests.

use std::ops::Range;

/// What the scanner needs from a host tokenizer.
pub trait Cursor {
    /// The character at the current position, `None` at end of input.
    fn lookahead(&self) -> Option<char>;

    /// Consume the current character. With `skip`, the character is left out of the token.
    fn advance(&mut self, skip: bool);

    /// Mark the current position as the end of the matched token.
    fn mark_end(&mut self);

    fn is_at_end(&self) -> bool;

    /// 0-based column of the current position.
    fn column(&self) -> u32;
}

/// A cursor over a `&str`, starting at a byte offset.
#[derive(Debug, Clone)]
pub struct SourceCursor<'s> {
    source: &'s str,
    start: usize,
    position: usize,
    marked_end: Option<usize>,
    tab_width: u32,
}

impl<'s> SourceCursor<'s> {
    /// Create a cursor at byte offset `position`. Tabs count as one column.
    pub fn new(source: &'s str, position: usize) -> Self {
        SourceCursor {
            source,
            start: position,
            position,
            marked_end: None,
            tab_width: 1,
        }
    }

    /// Expand tabs to the next multiple of `tab_width` when measuring columns.
    pub fn with_tab_width(mut self, tab_width: u32) -> Self {
        self.tab_width = tab_width.max(1);
        self
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The matched span: up to the marked end if one was marked, else up to the position.
    pub fn token_range(&self) -> Range<usize> {
        self.start..self.marked_end.unwrap_or(self.position)
    }

    pub fn token_text(&self) -> &'s str {
        &self.source[self.token_range()]
    }
}

impl Cursor for SourceCursor<'_> {
    fn lookahead(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    fn advance(&mut self, skip: bool) {
        if let Some(c) = self.lookahead() {
            self.position += c.len_utf8();
            if skip {
                self.start = self.position;
            }
        }
    }

    fn mark_end(&mut self) {
        self.marked_end = Some(self.position);
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    fn column(&self) -> u32 {
        let before = &self.source[..self.position];
        let line_start = before.rfind(|c: char| c == '\n' || c == '\r').map_or(0, |i| i + 1);
        measure_columns(&before[line_start..], self.tab_width)
    }
}

/// Width in columns of `text`, expanding tabs to the next tab stop.
pub fn measure_columns(text: &str, tab_width: u32) -> u32 {
    let tab_width = tab_width.max(1);
    text.chars().fold(0u32, |col, c| match c {
        '\t' => col.saturating_add(tab_width - col % tab_width),
        _ => col.saturating_add(1),
    })
}
