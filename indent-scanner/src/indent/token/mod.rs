//! Token types shared by the scanner, the host driver and tooling.

pub mod core;
pub mod formatting;
pub mod kind;

pub use core::Token;
pub use formatting::{detokenize, render_simple, render_spans, to_json, ToSourceString};
pub use kind::{TokenKind, ValidSymbols};
