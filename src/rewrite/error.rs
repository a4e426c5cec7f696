use bytes::Bytes;
use thiserror::Error;

/// A configured path key exists but does not hold a byte string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("path key {:?} holds a {found}, not a byte string", String::from_utf8_lossy(.key))]
pub struct KeyTypeError {
    /// The offending dictionary key.
    pub key: Bytes,
    /// Type name of the value actually found.
    pub found: &'static str,
}

/// Errors from parsing an `EXT=KEY[,KEY...]` category override.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeySpecError {
    #[error("expected EXT=KEY[,KEY...], got {0:?}")]
    MissingSeparator(String),

    #[error("empty file extension in {0:?}")]
    EmptyCategory(String),

    #[error("no keys given for extension {0:?}")]
    EmptyKeys(String),
}
