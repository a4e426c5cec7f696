use thiserror::Error;

/// Errors produced while decoding bencode input.
///
/// Every variant that can point at a location carries the byte offset into
/// the input where decoding stopped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unexpected end of input at byte {0}")]
    UnexpectedEof(usize),

    #[error("invalid integer at byte {offset}: {reason}")]
    InvalidInteger { offset: usize, reason: String },

    #[error("invalid string length at byte {0}")]
    InvalidStringLength(usize),

    #[error("unexpected character {ch:?} at byte {offset}")]
    UnexpectedChar { offset: usize, ch: char },

    #[error("dictionary key at byte {0} is not a byte string")]
    NonStringKey(usize),

    #[error("dictionary key at byte {0} is not in ascending order")]
    UnsortedKey(usize),

    #[error("trailing data after value at byte {0}")]
    TrailingData(usize),

    #[error("nesting too deep")]
    NestingTooDeep,
}

/// Errors produced while encoding a [`Value`](super::Value).
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
