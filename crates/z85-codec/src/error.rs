//! Error types for Z85 encoding/decoding.

use thiserror::Error;

/// Classification of a decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The input cannot be the output of the matching encoder at all (wrong
    /// length, empty input, characters outside the alphabet). Callers that
    /// probe arbitrary strings can treat this as "not Z85".
    NotApplicable,
    /// The input parses as Z85 but its content is impossible or its framing
    /// is damaged. Data in this state should not be silently discarded.
    Corrupt,
}

/// Error during encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("input length {len} is not a multiple of 4")]
    UnalignedLength { len: usize },
}

/// Error during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("input is empty or whitespace-only")]
    Empty,

    #[error("input length {len} is not a multiple of 5")]
    UnalignedLength { len: usize },

    #[error("byte {byte:#04x} at position {pos} is not in the Z85 alphabet")]
    InvalidCharacter { byte: u8, pos: usize },

    #[error("group {group} encodes a value greater than 0xFFFF_FFFF")]
    GroupOverflow { group: usize },

    #[error("padding header {value} out of range (expected 0..=3)")]
    PaddingOutOfRange { value: u8 },
}

impl DecodeError {
    /// Returns the failure classification for this error.
    pub fn kind(&self) -> FailureKind {
        match self {
            DecodeError::Empty
            | DecodeError::UnalignedLength { .. }
            | DecodeError::InvalidCharacter { .. } => FailureKind::NotApplicable,
            DecodeError::GroupOverflow { .. } | DecodeError::PaddingOutOfRange { .. } => {
                FailureKind::Corrupt
            }
        }
    }
}
