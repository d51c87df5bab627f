//! Testing utilities
//!
//!     Factories for building spanned token streams in tests, so expected streams read the same
//!     way in unit tests and in the integration tests under `tests/`.

pub mod factories;

pub use factories::{mk_token, mk_tokens, strip_loc, Tokens};
