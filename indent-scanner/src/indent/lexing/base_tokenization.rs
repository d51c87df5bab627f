//! Base tokenization for the host's regular rules
//!
//! This module runs the logos lexer. It never sees indentation tokens: line terminators are
//! left to the external scanner, and a terminator reaching logos comes back as an error token.
//!
//! This is NOT the host driver. [`HostLexer`](super::host::HostLexer) decides when the
//! external scanner gets the first look and only falls back to [`next_regular`] on no match.

use crate::indent::token::Token;
use logos::Logos;
use std::ops::Range;

/// Lex one regular token starting at byte offset `position`.
///
/// Unrecognized input becomes [`Token::Error`] with its text, so the stream still covers the
/// whole source. Returns `None` only at end of input.
pub fn next_regular(source: &str, position: usize) -> Option<(Token, Range<usize>)> {
    let rest = source.get(position..)?;
    let mut lexer = Token::lexer(rest);
    let result = lexer.next()?;
    let span = lexer.span();
    let token = result.unwrap_or_else(|_| Token::Error(lexer.slice().to_owned()));
    Some((token, position + span.start..position + span.end))
}

/// Tokenize a whole source with the regular rules only.
pub fn tokenize(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut tokens = Vec::new();
    let mut position = 0;
    while let Some((token, range)) = next_regular(source, position) {
        position = range.end;
        tokens.push((token, range));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indent::testing::factories::mk_tokens;

    #[test]
    fn test_tokenizes() {
        let tokens = tokenize("x = 1");
        assert_eq!(
            tokens,
            mk_tokens(&[
                (Token::Identifier("x".to_string()), 0, 1),
                (Token::Whitespace(" ".to_string()), 1, 2),
                (Token::Equals, 2, 3),
                (Token::Whitespace(" ".to_string()), 3, 4),
                (Token::Number("1".to_string()), 4, 5),
            ])
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
        assert_eq!(next_regular("abc", 3), None);
    }

    #[test]
    fn test_offsets_are_absolute() {
        assert_eq!(
            next_regular("ab cd", 3),
            Some((Token::Identifier("cd".to_string()), 3..5))
        );
    }

    #[test]
    fn test_unknown_input_is_kept() {
        let tokens = tokenize("a\nb");
        assert_eq!(
            tokens,
            mk_tokens(&[
                (Token::Identifier("a".to_string()), 0, 1),
                (Token::Error("\n".to_string()), 1, 2),
                (Token::Identifier("b".to_string()), 2, 3),
            ])
        );
    }
}
