use std::path::PathBuf;

use thiserror::Error;

use crate::bencode::{DecodeError, EncodeError};
use crate::rewrite::KeyTypeError;

/// Errors raised while relocating a session directory.
///
/// [`SessionError::MismatchedSlashes`], [`SessionError::EmptySource`] and
/// [`SessionError::ReadDir`] are fatal for a run. The others are reported per
/// file and never stop a batch.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("source and destination must both end with '/' or neither")]
    MismatchedSlashes,

    #[error("source path fragment is empty")]
    EmptySource,

    #[error("cannot read session directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("cannot encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: EncodeError,
    },

    #[error("{}: {source}", .path.display())]
    KeyType {
        path: PathBuf,
        #[source]
        source: KeyTypeError,
    },

    #[error("backup failed: {0}")]
    Walk(#[from] walkdir::Error),
}
