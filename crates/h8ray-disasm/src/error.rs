//! Error types for instruction decoding.

use thiserror::Error;

/// Errors produced while decoding H8S/2000 instruction streams.
///
/// Unrecognized byte patterns are NOT errors; they decode to the raw-word
/// sentinel. The variants here cover contract violations (a decode window
/// too short to hold any instruction) and internal-consistency defects the
/// splitter refuses to pass downstream.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Fewer bytes were supplied than the minimum instruction size.
    #[error("truncated instruction at {position:#x}: need {needed} bytes, have {available}")]
    Truncated {
        position: usize,
        needed: usize,
        available: usize,
    },

    /// A decoded record violated the length or sentinel invariants. This
    /// indicates a defect in the decode tables, not bad input.
    #[error("inconsistent record at {position:#x}: {reason}")]
    Inconsistent { position: usize, reason: &'static str },
}

impl DecodeError {
    pub fn truncated(position: usize, needed: usize, available: usize) -> Self {
        Self::Truncated {
            position,
            needed,
            available,
        }
    }

    pub fn inconsistent(position: usize, reason: &'static str) -> Self {
        Self::Inconsistent { position, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_include_position() {
        let err = DecodeError::truncated(0x1f, 2, 1);
        assert!(err.to_string().contains("0x1f"));
        let err = DecodeError::inconsistent(0x20, "odd length");
        assert!(err.to_string().contains("odd length"));
    }
}
