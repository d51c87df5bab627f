//! Token emission state machine
//!
//!     One [`Scanner`] tracks the indentation of one input stream. The host calls
//!     [`Scanner::scan`] once per token position; each call returns at most one token, chosen
//!     in strict priority order:
//!
//!         1. A queued Dedent, if Dedent is acceptable.
//!         2. A pending Indent, if Indent is acceptable.
//!         3. A Newline, if Newline is acceptable and the input is at a line terminator.
//!            The terminator and every following whitespace-only line are consumed into this
//!            one token. The column of the next meaningful line then drives the indent stack,
//!            which may arm a pending Indent or queue Dedents for the following calls.
//!         4. At end of input, a Dedent for an open level, if Dedent is acceptable.
//!
//!     Otherwise there is no match and the host tries its regular rules.
//!
//! End Of Input
//!
//!     Step 4 drops the innermost level and sets the queue to the remaining depth, so later
//!     calls drain through step 1 without touching the depth again. Under a grammar that stops
//!     accepting Dedent once its blocks are closed this yields exactly one Dedent per open
//!     level, and leaves the depth one below its value at end of input. A host that keeps
//!     accepting Dedent re-enters step 4 after each drain. Both shapes are pinned by tests.

use tracing::{debug, warn};

use super::codec::{self, Snapshot};
use super::cursor::Cursor;
use super::stack::{Adjustment, IndentStack};
use crate::indent::token::{TokenKind, ValidSymbols};

/// Per-stream scanner state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scanner {
    pub(crate) stack: IndentStack,
    pub(crate) queued_dedents: u8,
    pub(crate) pending_indent: bool,
}

/// Result of a scan call, with the stack decision that accompanied it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOutcome {
    pub token: Option<TokenKind>,
    /// Set only when a Newline measured the next line.
    pub adjustment: Option<Adjustment>,
}

impl ScanOutcome {
    fn token(kind: TokenKind) -> Self {
        ScanOutcome {
            token: Some(kind),
            adjustment: None,
        }
    }

    fn no_match() -> Self {
        ScanOutcome {
            token: None,
            adjustment: None,
        }
    }
}

fn is_line_terminator(c: Option<char>) -> bool {
    matches!(c, Some('\n') | Some('\r'))
}

impl Scanner {
    /// A fresh start-of-stream state.
    pub fn new() -> Self {
        Scanner::default()
    }

    pub fn stack(&self) -> &IndentStack {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn queued_dedents(&self) -> u8 {
        self.queued_dedents
    }

    pub fn pending_indent(&self) -> bool {
        self.pending_indent
    }

    /// Scan for one external token at the cursor.
    pub fn scan<C: Cursor + ?Sized>(
        &mut self,
        cursor: &mut C,
        valid: ValidSymbols,
    ) -> Option<TokenKind> {
        self.scan_traced(cursor, valid).token
    }

    /// Like [`Scanner::scan`], also reporting what the line measurement did to the stack.
    pub fn scan_traced<C: Cursor + ?Sized>(
        &mut self,
        cursor: &mut C,
        valid: ValidSymbols,
    ) -> ScanOutcome {
        if self.queued_dedents > 0 && valid.contains(TokenKind::Dedent) {
            self.queued_dedents -= 1;
            self.log_emit(TokenKind::Dedent);
            return ScanOutcome::token(TokenKind::Dedent);
        }

        if self.pending_indent && valid.contains(TokenKind::Indent) {
            self.pending_indent = false;
            self.log_emit(TokenKind::Indent);
            return ScanOutcome::token(TokenKind::Indent);
        }

        if valid.contains(TokenKind::Newline) && is_line_terminator(cursor.lookahead()) {
            let adjustment = self.scan_newline(cursor);
            self.log_emit(TokenKind::Newline);
            return ScanOutcome {
                token: Some(TokenKind::Newline),
                adjustment,
            };
        }

        if cursor.is_at_end() && valid.contains(TokenKind::Dedent) && self.stack.depth() > 0 {
            self.stack.close_innermost();
            self.queued_dedents = self.stack.depth() as u8;
            self.log_emit(TokenKind::Dedent);
            return ScanOutcome::token(TokenKind::Dedent);
        }

        ScanOutcome::no_match()
    }

    /// Consume a terminator plus blank lines, then measure the next meaningful line.
    ///
    /// Returns `None` when the blank lines run into end of input.
    fn scan_newline<C: Cursor + ?Sized>(&mut self, cursor: &mut C) -> Option<Adjustment> {
        consume_terminator(cursor);
        cursor.mark_end();

        loop {
            while matches!(cursor.lookahead(), Some(' ') | Some('\t')) {
                cursor.advance(false);
            }
            if !is_line_terminator(cursor.lookahead()) {
                break;
            }
            consume_terminator(cursor);
            cursor.mark_end();
        }

        if cursor.is_at_end() {
            return None;
        }

        let width = u16::try_from(cursor.column()).unwrap_or(u16::MAX);
        let adjustment = self.stack.adjust(width);
        match adjustment {
            Adjustment::Opened => self.pending_indent = true,
            Adjustment::Clamped => {
                warn!(
                    target: "indent_scanner::scanner",
                    width,
                    depth = self.stack.depth(),
                    "indentation deeper than the supported maximum; level not recorded"
                );
                self.pending_indent = true;
            }
            Adjustment::Closed(count) => {
                self.queued_dedents = self.queued_dedents.saturating_add(count as u8);
            }
            Adjustment::Unchanged => {}
        }
        Some(adjustment)
    }

    fn log_emit(&self, kind: TokenKind) {
        debug!(
            target: "indent_scanner::scanner",
            kind = %kind,
            depth = self.stack.depth(),
            queued_dedents = self.queued_dedents,
            pending_indent = self.pending_indent,
            "emit"
        );
    }

    /// Write the state into `buffer`, returning the number of bytes used.
    pub fn serialize(&self, buffer: &mut [u8]) -> usize {
        codec::encode(self, buffer)
    }

    /// Restore the state from bytes produced by [`Scanner::serialize`].
    /// An empty buffer means start of stream.
    pub fn deserialize(&mut self, buffer: &[u8]) {
        codec::decode(self, buffer)
    }

    pub fn from_bytes(buffer: &[u8]) -> Self {
        let mut scanner = Scanner::new();
        scanner.deserialize(buffer);
        scanner
    }

    /// Serialize into an owned snapshot sized by the host buffer capacity.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.deserialize(snapshot.as_bytes())
    }
}

/// Consume `\n`, `\r` or `\r\n`.
fn consume_terminator<C: Cursor + ?Sized>(cursor: &mut C) {
    if cursor.lookahead() == Some('\r') {
        cursor.advance(false);
    }
    if cursor.lookahead() == Some('\n') {
        cursor.advance(false);
    }
}
