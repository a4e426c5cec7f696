//! torrent-mover - relocate download paths in torrent client session files
//!
//! Torrent clients remember where each torrent's data lives in a per-torrent
//! session file. After moving the data on disk, those files have to be
//! updated or the client will report the torrents as missing. This crate
//! rewrites the stored paths without disturbing anything else in the file.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 Bencode encoding/decoding with byte-exact round-trips
//! - [`rewrite`] - Path-key configuration and substring substitution
//! - [`session`] - Session directory scanning, backup and batch processing

pub mod bencode;
pub mod rewrite;
pub mod session;

pub use bencode::{decode, encode, DecodeError, EncodeError, Value};
pub use rewrite::{rewrite, FileCategory, KeyTypeError, PathKeyConfig, RewriteOutcome, SkipReason};
pub use session::{BatchReport, ProcessOptions, Relocation, SessionError};
