//! Lexer
//!
//!     This module drives the external scanner the way a host tokenizer would, producing one
//!     flat token stream for a source.
//!
//! The Lexing Loop
//!
//!     At each position:
//!         1. The external scanner is asked first, with the mask of kinds the (modeled) grammar
//!            accepts. See [host](host).
//!         2. On no match, logos lexes one regular token. See
//!            [base_tokenization](base_tokenization).
//!
//!     Logos never sees line terminators in normal operation. Horizontal whitespace is a
//!     regular token, so the leading indentation of a line shows up as `Whitespace` right after
//!     the Newline (and any Indent) that measured it.
//!
//! Source Preservation
//!
//!     Every token keeps its text and its byte range. Ranges are contiguous and cover the whole
//!     source, so [`detokenize`] of a lexed stream is the source again. Indent and Dedent are
//!     zero width at the start of the line they belong to.

pub mod base_tokenization;
pub mod common;
pub mod host;

pub use crate::indent::token::formatting::detokenize;
pub use base_tokenization::{next_regular, tokenize};
pub use common::LexError;
pub use host::{Checkpoint, HostLexer, LexOptions, MaskPolicy};

use crate::indent::token::Token;
use std::ops::Range;

/// Lex a source with default options.
pub fn lex(source: &str) -> Vec<(Token, Range<usize>)> {
    HostLexer::new(source).collect()
}

pub fn lex_with(source: &str, options: &LexOptions) -> Vec<(Token, Range<usize>)> {
    HostLexer::with_options(source, options.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indent::testing::factories::mk_tokens;
    use crate::indent::token::render_simple;

    #[test]
    fn test_function_definition() {
        let source = "def f():\n  return 0\n";
        let tokens = lex(source);
        assert_eq!(
            render_simple(&tokens),
            "def f ( ) : <newline> <indent> return 0 <newline> <dedent>"
        );
        assert_eq!(detokenize(&tokens), source);
    }

    #[test]
    fn test_flat_program() {
        let tokens = lex("x = 1\ny = 2");
        assert_eq!(
            tokens,
            mk_tokens(&[
                (Token::Identifier("x".to_string()), 0, 1),
                (Token::Whitespace(" ".to_string()), 1, 2),
                (Token::Equals, 2, 3),
                (Token::Whitespace(" ".to_string()), 3, 4),
                (Token::Number("1".to_string()), 4, 5),
                (Token::Newline("\n".to_string()), 5, 6),
                (Token::Identifier("y".to_string()), 6, 7),
                (Token::Whitespace(" ".to_string()), 7, 8),
                (Token::Equals, 8, 9),
                (Token::Whitespace(" ".to_string()), 9, 10),
                (Token::Number("2".to_string()), 10, 11),
            ])
        );
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(lex(""), vec![]);
    }

    #[test]
    fn test_permissive_mask_keeps_flushing() {
        let options = LexOptions {
            mask: MaskPolicy::Permissive,
            ..LexOptions::default()
        };
        let tokens = lex_with("a\n  b\n    c", &options);
        let dedents = tokens.iter().filter(|(t, _)| *t == Token::Dedent).count();
        assert_eq!(dedents, 3);
    }
}
