//! State codec
//!
//!     The host snapshots scanner state after scans and restores it when it backtracks, so
//!     the byte form must carry everything that influences later scans. Layout:
//!
//!         byte 0        depth (index of the innermost open level)
//!         byte 1        queued dedents
//!         byte 2        pending indent (0 or 1)
//!         bytes 3..     width of each level 0..=depth, u16 little-endian
//!
//!     Widths have a fixed little-endian encoding, so snapshots do not depend on the in-memory
//!     layout of [`Scanner`] or on the platform.
//!
//!     Both directions are lossy only at the buffer edge. Encoding stops before a width that
//!     would not fit. Decoding stops when the input runs out, and any level it did not reach
//!     keeps whatever width the scanner held before. With [`SERIALIZATION_BUFFER_SIZE`] bytes
//!     a full stack always fits.

use tracing::{trace, warn};

use super::scanner::Scanner;
use super::stack::MAX_DEPTH;

/// Snapshot capacity the host provides.
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

const HEADER_LEN: usize = 3;
const WIDTH_LEN: usize = 2;

/// Encode `scanner` into `buffer`. Returns the number of bytes written.
pub fn encode(scanner: &Scanner, buffer: &mut [u8]) -> usize {
    let depth = scanner.stack.depth();
    let header = [
        depth as u8,
        scanner.queued_dedents,
        u8::from(scanner.pending_indent),
    ];

    let mut size = 0;
    for byte in header {
        match buffer.get_mut(size) {
            Some(slot) => *slot = byte,
            None => return truncated(size, depth),
        }
        size += 1;
    }

    for &width in scanner.stack.levels() {
        if size + WIDTH_LEN > buffer.len() {
            return truncated(size, depth);
        }
        buffer[size..size + WIDTH_LEN].copy_from_slice(&width.to_le_bytes());
        size += WIDTH_LEN;
    }

    trace!(target: "indent_scanner::codec", size, depth, "serialized");
    size
}

fn truncated(size: usize, depth: usize) -> usize {
    warn!(
        target: "indent_scanner::codec",
        size,
        depth,
        "snapshot buffer too small; state truncated"
    );
    size
}

/// Decode `buffer` into `scanner`. An empty buffer resets to start of stream.
pub fn decode(scanner: &mut Scanner, buffer: &[u8]) {
    if buffer.is_empty() {
        scanner.stack.reset();
        scanner.queued_dedents = 0;
        scanner.pending_indent = false;
        trace!(target: "indent_scanner::codec", "reset to start of stream");
        return;
    }

    // Header bytes beyond the end of a short buffer read as zero
    let header = |i: usize| buffer.get(i).copied().unwrap_or(0);
    let depth = usize::from(header(0)).min(MAX_DEPTH - 1);
    scanner.stack.set_depth(depth);
    scanner.queued_dedents = header(1);
    scanner.pending_indent = header(2) != 0;

    let widths = buffer.get(HEADER_LEN..).unwrap_or_default();
    for (index, pair) in widths.chunks_exact(WIDTH_LEN).take(depth + 1).enumerate() {
        scanner
            .stack
            .set_width(index, u16::from_le_bytes([pair[0], pair[1]]));
    }

    trace!(target: "indent_scanner::codec", len = buffer.len(), depth, "deserialized");
}

/// An owned, encoded scanner state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub struct Snapshot {
    bytes: Vec<u8>,
}

impl Snapshot {
    /// Encode `scanner` with the full host buffer capacity.
    pub fn capture(scanner: &Scanner) -> Self {
        let mut buffer = [0u8; SERIALIZATION_BUFFER_SIZE];
        let size = encode(scanner, &mut buffer);
        Snapshot {
            bytes: buffer[..size].to_vec(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lowercase hex, two digits per byte.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}
