//! Path substitution inside decoded session files.
//!
//! A session file's root dictionary stores the torrent's download location
//! under one or more client-specific keys. [`PathKeyConfig`] says which keys to
//! look at for each [`FileCategory`], and [`rewrite`] swaps a source path
//! fragment for a destination fragment in those values, reporting what
//! happened as a [`RewriteOutcome`].
//!
//! The rewriter is agnostic to path semantics: it does plain byte-substring
//! replacement. Keeping `src` and `dst` consistent (for example both ending in
//! `/`) is up to the caller; see [`Relocation`](crate::session::Relocation).

mod config;
mod error;
mod rewriter;

pub use config::{FileCategory, KeySpec, PathKeyConfig};
pub use error::{KeySpecError, KeyTypeError};
pub use rewriter::{replace_all, rewrite, RewriteOutcome, SkipReason};
