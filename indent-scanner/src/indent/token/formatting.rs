//! Token stream formatting
//!
//! Converts token streams back into source text and into the textual views the CLI prints.
//!
//! - [`detokenize`] reproduces the original source (round-trip fidelity)
//! - [`render_simple`] gives a compact one-line view, external kinds as `<indent>` etc.
//! - [`render_spans`] lists one token per line with its byte range
//! - [`to_json`] serializes `{ token, start, end }` records

use serde::Serialize;
use std::fmt;
use std::ops::Range;

use super::core::Token;

/// Trait for converting a token back to the source text it was lexed from
pub trait ToSourceString {
    fn to_source_string(&self) -> String;
}

impl ToSourceString for Token {
    fn to_source_string(&self) -> String {
        match self {
            Token::Def => "def".to_string(),
            Token::If => "if".to_string(),
            Token::Return => "return".to_string(),
            Token::Equals => "=".to_string(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::OpenParen => "(".to_string(),
            Token::CloseParen => ")".to_string(),
            Token::Colon => ":".to_string(),
            Token::Comma => ",".to_string(),
            Token::Identifier(s)
            | Token::Number(s)
            | Token::StringLiteral(s)
            | Token::Comment(s)
            | Token::Whitespace(s)
            | Token::Newline(s)
            | Token::Error(s) => s.clone(),
            // Zero-width
            Token::Indent | Token::Dedent => String::new(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.external_kind() {
            Some(kind) => write!(f, "<{}>", kind),
            None => f.write_str(&self.to_source_string()),
        }
    }
}

/// Detokenize a token stream back into source text.
pub fn detokenize(tokens: &[(Token, Range<usize>)]) -> String {
    tokens
        .iter()
        .map(|(token, _)| token.to_source_string())
        .collect()
}

/// Non-whitespace tokens joined by single spaces.
pub fn render_simple(tokens: &[(Token, Range<usize>)]) -> String {
    tokens
        .iter()
        .filter(|(token, _)| !token.is_whitespace())
        .map(|(token, _)| token.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One `start..end kind text` line per token, text escaped.
pub fn render_spans(tokens: &[(Token, Range<usize>)]) -> String {
    let mut out = String::new();
    for (token, range) in tokens {
        out.push_str(&format!(
            "{}..{} {} {:?}\n",
            range.start,
            range.end,
            token.kind_name(),
            token.to_source_string()
        ));
    }
    out
}

#[derive(Serialize)]
struct SpannedToken<'a> {
    token: &'a Token,
    start: usize,
    end: usize,
}

/// Pretty JSON array of `{ token, start, end }` records.
pub fn to_json(tokens: &[(Token, Range<usize>)]) -> serde_json::Result<String> {
    let records: Vec<SpannedToken<'_>> = tokens
        .iter()
        .map(|(token, range)| SpannedToken {
            token,
            start: range.start,
            end: range.end,
        })
        .collect();
    serde_json::to_string_pretty(&records)
}
