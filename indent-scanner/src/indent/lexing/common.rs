//! Common lexer module
//!
//! Errors shared by the host driver.

use thiserror::Error;

/// Errors that can occur while driving the scanner over a source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Restoring a checkpoint taken over a different, longer source
    #[error("checkpoint position {position} is past the end of the source ({len} bytes)")]
    CheckpointOutOfRange { position: usize, len: usize },
    /// Restoring a checkpoint whose position splits a character
    #[error("checkpoint position {0} is not on a character boundary")]
    CheckpointNotOnBoundary(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_position() {
        let err = LexError::CheckpointOutOfRange {
            position: 12,
            len: 4,
        };
        assert_eq!(
            err.to_string(),
            "checkpoint position 12 is past the end of the source (4 bytes)"
        );
        assert_eq!(
            LexError::CheckpointNotOnBoundary(1).to_string(),
            "checkpoint position 1 is not on a character boundary"
        );
    }
}
