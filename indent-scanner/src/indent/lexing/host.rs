//! Host driver
//!
//!     [`HostLexer`] plays the part of the host tokenizer. At every position it offers the
//!     external scanner the first look, with a mask of acceptable kinds; on no match it lexes a
//!     single regular token with logos. The result is one flat `(Token, Range)` stream in which
//!     every byte of the source is covered exactly once and Indent / Dedent are zero width.
//!
//! Acceptability Masks
//!
//!     A real host derives the mask from its grammar. The driver has no grammar, so it models
//!     one of two shapes, see [`MaskPolicy`]. The balanced shape only accepts a Dedent while
//!     an emitted Indent is still unmatched, which is what a block rule
//!     `newline indent statement+ dedent` accepts.
//!
//! Speculation
//!
//!     [`HostLexer::checkpoint`] stores the position and the scanner state. The scanner state
//!     goes through the byte codec, exactly as a backtracking host would keep it, and
//!     [`HostLexer::restore`] decodes it again.

use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::trace;

use super::base_tokenization::next_regular;
use super::common::LexError;
use crate::indent::scanning::{Adjustment, Scanner, Snapshot, SourceCursor};
use crate::indent::token::{Token, TokenKind, ValidSymbols};

/// How the driver decides which external kinds are acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaskPolicy {
    /// Indent and Newline always; Dedent only while emitted Indents outnumber Dedents.
    #[default]
    Balanced,
    /// Every kind at every position.
    Permissive,
}

/// Options for driving the scanner over a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexOptions {
    /// Columns per tab stop when measuring indentation; 1 counts a tab as one column.
    pub tab_width: u32,
    pub mask: MaskPolicy,
}

impl Default for LexOptions {
    fn default() -> Self {
        LexOptions {
            tab_width: 1,
            mask: MaskPolicy::Balanced,
        }
    }
}

/// A saved driver position, for speculative lexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    position: usize,
    open_blocks: usize,
    clamped_opens: usize,
    snapshot: Snapshot,
}

impl Checkpoint {
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

/// Iterator over the full token stream of a source.
#[derive(Debug, Clone)]
pub struct HostLexer<'s> {
    source: &'s str,
    position: usize,
    scanner: Scanner,
    options: LexOptions,
    open_blocks: usize,
    clamped_opens: usize,
}

impl<'s> HostLexer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self::with_options(source, LexOptions::default())
    }

    pub fn with_options(source: &'s str, options: LexOptions) -> Self {
        HostLexer {
            source,
            position: 0,
            scanner: Scanner::new(),
            options,
            open_blocks: 0,
            clamped_opens: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Emitted Indents not yet matched by a Dedent.
    pub fn open_blocks(&self) -> usize {
        self.open_blocks
    }

    /// Indentation increases absorbed because the stack was full.
    pub fn clamped_opens(&self) -> usize {
        self.clamped_opens
    }

    fn valid_symbols(&self) -> ValidSymbols {
        match self.options.mask {
            MaskPolicy::Permissive => ValidSymbols::all(),
            MaskPolicy::Balanced if self.open_blocks > 0 => ValidSymbols::all(),
            MaskPolicy::Balanced => ValidSymbols::all().without(TokenKind::Dedent),
        }
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.position,
            open_blocks: self.open_blocks,
            clamped_opens: self.clamped_opens,
            snapshot: self.scanner.snapshot(),
        }
    }

    pub fn restore(&mut self, checkpoint: &Checkpoint) -> Result<(), LexError> {
        if checkpoint.position > self.source.len() {
            return Err(LexError::CheckpointOutOfRange {
                position: checkpoint.position,
                len: self.source.len(),
            });
        }
        if !self.source.is_char_boundary(checkpoint.position) {
            return Err(LexError::CheckpointNotOnBoundary(checkpoint.position));
        }
        self.position = checkpoint.position;
        self.open_blocks = checkpoint.open_blocks;
        self.clamped_opens = checkpoint.clamped_opens;
        self.scanner.restore(&checkpoint.snapshot);
        Ok(())
    }

    fn scan_external(&mut self) -> Option<(Token, Range<usize>)> {
        let mut cursor =
            SourceCursor::new(self.source, self.position).with_tab_width(self.options.tab_width);
        let outcome = self.scanner.scan_traced(&mut cursor, self.valid_symbols());
        let kind = outcome.token?;

        if outcome.adjustment == Some(Adjustment::Clamped) {
            self.clamped_opens += 1;
        }
        match kind {
            TokenKind::Indent => self.open_blocks += 1,
            TokenKind::Dedent => self.open_blocks = self.open_blocks.saturating_sub(1),
            TokenKind::Newline => {}
        }

        let range = cursor.token_range();
        trace!(
            target: "indent_scanner::host",
            kind = %kind,
            start = range.start,
            end = range.end,
            open_blocks = self.open_blocks,
            "external token"
        );
        Some((Token::from_external(kind, cursor.token_text()), range))
    }
}

impl Iterator for HostLexer<'_> {
    type Item = (Token, Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        let (token, range) = match self.scan_external() {
            Some(external) => external,
            None => next_regular(self.source, self.position)?,
        };
        self.position = range.end;
        Some((token, range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indent::testing::factories::{mk_tokens, strip_loc};

    #[test]
    fn test_block_stream() {
        let tokens: Vec<_> = HostLexer::new("if x:\n  y\n").collect();
        assert_eq!(
            tokens,
            mk_tokens(&[
                (Token::If, 0, 2),
                (Token::Whitespace(" ".to_string()), 2, 3),
                (Token::Identifier("x".to_string()), 3, 4),
                (Token::Colon, 4, 5),
                (Token::Newline("\n".to_string()), 5, 6),
                (Token::Indent, 6, 6),
                (Token::Whitespace("  ".to_string()), 6, 8),
                (Token::Identifier("y".to_string()), 8, 9),
                (Token::Newline("\n".to_string()), 9, 10),
                (Token::Dedent, 10, 10),
            ])
        );
    }

    #[test]
    fn test_balanced_mask_stops_after_blocks_close() {
        let mut lexer = HostLexer::new("a\n  b\n    c");
        let tokens = strip_loc(lexer.by_ref().collect());
        let dedents = tokens.iter().filter(|t| **t == Token::Dedent).count();
        assert_eq!(dedents, 2);
        assert_eq!(lexer.open_blocks(), 0);
    }

    #[test]
    fn test_checkpoint_restore_replays() {
        let source = "def f():\n  return 1\nx";
        let mut lexer = HostLexer::new(source);
        // Up to and including the Newline that arms the Indent
        for _ in 0..7 {
            lexer.next();
        }
        let checkpoint = lexer.checkpoint();
        assert!(lexer.scanner().pending_indent());
        assert_eq!(checkpoint.position(), 9);
        // Depth 1 at width 2, Indent armed
        assert_eq!(checkpoint.snapshot().to_hex(), "01000100000200");

        let first: Vec<_> = lexer.by_ref().collect();
        lexer.restore(&checkpoint).expect("checkpoint within source");
        let second: Vec<_> = lexer.collect();
        assert_eq!(first, second);
        assert_eq!(first[0], (Token::Indent, 9..9));
    }

    #[test]
    fn test_restore_rejects_foreign_checkpoint() {
        let long = "a\n  b\n  c\n";
        let mut lexer = HostLexer::new(long);
        lexer.by_ref().for_each(drop);
        let checkpoint = lexer.checkpoint();

        let mut short = HostLexer::new("a");
        assert_eq!(
            short.restore(&checkpoint),
            Err(LexError::CheckpointOutOfRange {
                position: long.len(),
                len: 1
            })
        );
    }

    #[test]
    fn test_restore_rejects_split_character() {
        let mut lexer = HostLexer::new("\u{e9}");
        let checkpoint = Checkpoint {
            position: 1,
            open_blocks: 0,
            clamped_opens: 0,
            snapshot: Snapshot::default(),
        };
        assert_eq!(
            lexer.restore(&checkpoint),
            Err(LexError::CheckpointNotOnBoundary(1))
        );
    }

    #[test]
    fn test_tab_width_changes_measured_levels() {
        // With tab width 1 the tab line (1) is shallower than the space line (2)
        let source = "a\n  b\n\tc\n";
        let narrow = strip_loc(HostLexer::new(source).collect());
        assert!(narrow.contains(&Token::Dedent));

        // With tab width 2 both lines sit at column 2
        let options = LexOptions {
            tab_width: 2,
            ..LexOptions::default()
        };
        let wide = strip_loc(HostLexer::with_options(source, options).collect());
        let position_of_c = wide
            .iter()
            .position(|t| *t == Token::Identifier("c".to_string()))
            .expect("c is lexed");
        assert!(!wide[..position_of_c].contains(&Token::Dedent));
    }
}
