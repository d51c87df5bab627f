//! Factories for spanned tokens

use crate::indent::token::Token;
use std::ops::Range;

/// A spanned token stream, as produced by the host driver
pub type Tokens = Vec<(Token, Range<usize>)>;

/// Make a spanned token
pub fn mk_token(token: Token, start: usize, end: usize) -> (Token, Range<usize>) {
    (token, start..end)
}

/// Make a vector of spanned tokens from a list of (Token, start, end)
pub fn mk_tokens(specs: &[(Token, usize, usize)]) -> Tokens {
    specs
        .iter()
        .cloned()
        .map(|(t, s, e)| mk_token(t, s, e))
        .collect()
}

/// Drop locations, keeping only the tokens
pub fn strip_loc(pairs: Tokens) -> Vec<Token> {
    pairs.into_iter().map(|(t, _)| t).collect()
}
