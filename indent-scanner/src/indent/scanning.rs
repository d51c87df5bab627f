//! Indentation scanning
//!
//!     This module is the external scanner proper: the part of lexing a regular tokenizer
//!     cannot do on its own. It produces three token kinds, Indent, Dedent and Newline, and
//!     knows nothing about what they mean in the grammar.
//!
//! Components
//!
//!     1. The indent stack. See [stack](stack).
//!        Records open indentation widths and decides, for the width of a new line, whether a
//!        block opens, some blocks close, or nothing changes.
//!
//!     2. The emission state machine. See [scanner](scanner).
//!        Invoked once per host scan request. Returns owed tokens first (queued Dedents, then
//!        a pending Indent), then looks for a line boundary, then flushes open blocks at end
//!        of input.
//!
//!     3. The state codec. See [codec](codec).
//!        Packs the stack, the pending flag and the dedent queue into a small buffer so a
//!        backtracking host can snapshot and restore the scanner exactly.
//!
//!     The host side of the protocol is the [`Cursor`] trait. [`SourceCursor`] implements it
//!     over a string and owns the tab policy.
//!
//! Call Protocol
//!
//!     create       [`Scanner::new`]
//!     destroy      drop the scanner
//!     serialize    [`Scanner::serialize`] / [`Scanner::snapshot`]
//!     deserialize  [`Scanner::deserialize`] / [`Scanner::restore`]; empty input = start of stream
//!     scan         [`Scanner::scan`]
//!
//!     A scan either returns a token or reports no match. There is no error path: indentation
//!     past [`MAX_DEPTH`] stops being recorded and an undersized snapshot buffer truncates,
//!     both silently as far as return values go.

pub mod codec;
pub mod cursor;
pub mod scanner;
pub mod stack;

pub use codec::{Snapshot, SERIALIZATION_BUFFER_SIZE};
pub use cursor::{measure_columns, Cursor, SourceCursor};
pub use scanner::{ScanOutcome, Scanner};
pub use stack::{Adjustment, IndentStack, MAX_DEPTH};
