//! Token definitions for the host's regular lexer
//!
//!     The demo language is a small Python-like language: `def`, `if` and `return`, assignments,
//!     calls and arithmetic, with blocks delimited purely by indentation. Everything that can
//!     be described by a regular expression is lexed by logos from the variants below.
//!
//!     The three indentation variants (`Indent`, `Dedent`, `Newline`) are never produced by
//!     logos. They are synthetic tokens created from the external scanner's results, and live
//!     in the same enum so a single stream carries the whole picture.
//!
//!     Every variant keeps enough text to detokenize the stream back into the exact source.
//!     `Indent` and `Dedent` are zero width and contribute nothing.

use logos::Logos;
use serde::{Deserialize, Serialize};

use super::kind::TokenKind;

/// All tokens a host stream can contain.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum Token {
    // Keywords
    #[token("def")]
    Def,
    #[token("if")]
    If,
    #[token("return")]
    Return,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_owned())]
    Identifier(String),

    #[regex(r"[0-9]+", |lex| lex.slice().to_owned())]
    Number(String),

    #[regex(r#""[^"]*""#, |lex| lex.slice().to_owned())]
    StringLiteral(String),

    #[regex(r"#[^\r\n]*", |lex| lex.slice().to_owned())]
    Comment(String),

    // Operators and punctuation
    #[token("=")]
    Equals,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,

    // Horizontal whitespace only; line terminators belong to the external scanner
    #[regex(r"[ \t]+", |lex| lex.slice().to_owned())]
    Whitespace(String),

    // Synthetic tokens produced from external scanner results
    Indent,
    Dedent,
    Newline(String),

    /// Input no rule recognizes, kept verbatim.
    Error(String),
}

impl Token {
    /// Build the stream token for an external scanner result.
    ///
    /// `text` is the matched source slice; it is empty for the zero-width kinds.
    pub fn from_external(kind: TokenKind, text: &str) -> Token {
        match kind {
            TokenKind::Indent => Token::Indent,
            TokenKind::Dedent => Token::Dedent,
            TokenKind::Newline => Token::Newline(text.to_owned()),
        }
    }

    /// The external kind this token came from, if any.
    pub fn external_kind(&self) -> Option<TokenKind> {
        match self {
            Token::Indent => Some(TokenKind::Indent),
            Token::Dedent => Some(TokenKind::Dedent),
            Token::Newline(_) => Some(TokenKind::Newline),
            _ => None,
        }
    }

    pub fn is_external(&self) -> bool {
        self.external_kind().is_some()
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace(_))
    }

    /// Short lowercase name of the variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Def => "def",
            Token::If => "if",
            Token::Return => "return",
            Token::Identifier(_) => "identifier",
            Token::Number(_) => "number",
            Token::StringLiteral(_) => "string_literal",
            Token::Comment(_) => "comment",
            Token::Equals => "equals",
            Token::Plus => "plus",
            Token::Minus => "minus",
            Token::Star => "star",
            Token::Slash => "slash",
            Token::OpenParen => "open_paren",
            Token::CloseParen => "close_paren",
            Token::Colon => "colon",
            Token::Comma => "comma",
            Token::Whitespace(_) => "whitespace",
            Token::Indent => "indent",
            Token::Dedent => "dedent",
            Token::Newline(_) => "newline",
            Token::Error(_) => "error",
        }
    }
}
