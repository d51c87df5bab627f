//! # indent-scanner
//!
//! An indentation-aware external scanner for whitespace-delimited grammars.
//!
//! Regular lexical rules cannot say "indentation grew relative to a stack of earlier levels",
//! so a host tokenizer hands that decision to this crate through a narrow protocol: create a
//! [`Scanner`](indent::scanning::Scanner), call `scan` with a cursor and the set of acceptable
//! kinds, and snapshot / restore its state whenever the host wants to backtrack.
//!
//! File Layout
//!
//! src/indent
//!   ├── scanning     The core: indent stack, emission state machine, state codec, cursor
//!   ├── token        External token kinds, the host's regular tokens, formatting
//!   ├── lexing       A host driver that interleaves the scanner with a logos lexer
//!   └── testing      Factories shared by unit and integration tests
//!
//! The scanner never owns input. Everything it knows about the text comes through the
//! [`Cursor`](indent::scanning::Cursor) trait, so the same state machine runs under any host
//! that can peek, advance, mark a token end and report a column.

pub mod indent;

pub use indent::lexing::{detokenize, lex, lex_with, HostLexer, LexError, LexOptions, MaskPolicy};
pub use indent::scanning::{
    Adjustment, Cursor, IndentStack, ScanOutcome, Scanner, Snapshot, SourceCursor, MAX_DEPTH,
    SERIALIZATION_BUFFER_SIZE,
};
pub use indent::token::{Token, TokenKind, ValidSymbols};
