//! External token kinds and the acceptability mask
//!
//!     The host grammar declares its external tokens in a fixed order and refers to them by
//!     index. The order here must match that declaration:
//!
//!         0 = Indent   (open-block, zero width)
//!         1 = Dedent   (close-block, zero width)
//!         2 = Newline  (line boundary, spans the terminator and any blank lines after it)
//!
//!     On every scan request the host also says which of these kinds the current grammar
//!     position would accept. That is the [`ValidSymbols`] mask.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A token kind the external scanner can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u16)]
pub enum TokenKind {
    /// Start of an indented block.
    Indent = 0,
    /// End of an indented block.
    Dedent = 1,
    /// A line terminator plus any whitespace-only lines right after it.
    Newline = 2,
}

impl TokenKind {
    /// All kinds, in host declaration order.
    pub const ALL: [TokenKind; 3] = [TokenKind::Indent, TokenKind::Dedent, TokenKind::Newline];

    /// The index the host grammar uses for this kind.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Map a host symbol index back to a kind.
    pub fn from_index(index: usize) -> Option<TokenKind> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Indent => "indent",
            TokenKind::Dedent => "dedent",
            TokenKind::Newline => "newline",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which external kinds the host will accept at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidSymbols {
    accepted: [bool; 3],
}

impl ValidSymbols {
    /// Every kind is acceptable.
    pub fn all() -> Self {
        ValidSymbols {
            accepted: [true; 3],
        }
    }

    /// No kind is acceptable.
    pub fn none() -> Self {
        ValidSymbols::default()
    }

    /// Only `kind` is acceptable.
    pub fn only(kind: TokenKind) -> Self {
        ValidSymbols::none().with(kind)
    }

    pub fn with(mut self, kind: TokenKind) -> Self {
        self.accepted[kind.index()] = true;
        self
    }

    pub fn without(mut self, kind: TokenKind) -> Self {
        self.accepted[kind.index()] = false;
        self
    }

    pub fn contains(&self, kind: TokenKind) -> bool {
        self.accepted[kind.index()]
    }

    /// Build a mask from a host-style boolean array indexed by [`TokenKind::index`].
    ///
    /// Missing entries count as not acceptable; extra entries belong to other external
    /// tokens the host may declare after ours and are ignored.
    pub fn from_slice(valid: &[bool]) -> Self {
        let mut mask = ValidSymbols::none();
        for kind in TokenKind::ALL {
            if valid.get(kind.index()).copied().unwrap_or(false) {
                mask = mask.with(kind);
            }
        }
        mask
    }
}
