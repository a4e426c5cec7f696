//! Bencode encoding and decoding ([BEP-3]).
//!
//! Both rTorrent (`*.rtorrent`) and qBittorrent (`*.fastresume`) persist
//! per-torrent session state as a single bencoded dictionary. Paths are
//! only rewritten safely if every value the rewriter does not touch comes
//! back out byte-for-byte, so this codec is strict: there is exactly one
//! accepted encoding for every [`Value`].
//!
//! # Data Types
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! # Examples
//!
//! ```
//! use torrent_mover::bencode::{decode, encode};
//!
//! let data = b"d9:directory30:/downloads/rTorrent/Temp/Movie5:statei1ee";
//! let value = decode(data).unwrap();
//! assert_eq!(
//!     value.get(b"directory").and_then(|v| v.as_str()),
//!     Some("/downloads/rTorrent/Temp/Movie")
//! );
//! assert_eq!(encode(&value).unwrap(), data);
//! ```
//!
//! # Error Handling
//!
//! Decoding fails with a [`DecodeError`] on:
//!
//! - [`DecodeError::UnexpectedEof`] - input ended before a construct closed
//! - [`DecodeError::InvalidInteger`] - malformed integer (e.g. leading zeros, overflow)
//! - [`DecodeError::InvalidStringLength`] - non-numeric or padded length prefix
//! - [`DecodeError::NonStringKey`] / [`DecodeError::UnsortedKey`] - bad dictionary keys
//! - [`DecodeError::NestingTooDeep`] - recursion limit exceeded (max 64 levels)
//! - [`DecodeError::TrailingData`] - extra data after the value
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod value;

pub use decode::decode;
pub use encode::{encode, encode_to};
pub use error::{DecodeError, EncodeError};
pub use value::Value;

#[cfg(test)]
mod tests;
