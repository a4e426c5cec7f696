use super::config::{FileCategory, PathKeyConfig};
use super::error::KeyTypeError;
use crate::bencode::Value;
use bytes::Bytes;

/// Why a file was left alone without looking for the source fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The file's category has no entry in the [`PathKeyConfig`].
    UnknownCategory,
    /// None of the category's keys exist at the root of the tree.
    NoKeysFound,
}

/// Result of running [`rewrite`] over one decoded session file.
///
/// Only [`RewriteOutcome::Changed`] means the tree differs from what was
/// decoded; callers should re-encode and write back in that case alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    Skipped(SkipReason),
    /// Path keys were present but none contained the source fragment.
    Unchanged,
    /// This many keys had at least one occurrence replaced.
    Changed(usize),
    /// A path key held something other than a byte string. The tree was not modified.
    Failed(KeyTypeError),
}

impl RewriteOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, RewriteOutcome::Changed(_))
    }
}

/// Replaces `src` with `dst` in the path values of a decoded session file.
///
/// Keys configured for `category` are visited in order. Keys missing from the
/// root dictionary are ignored. Every byte-string value containing `src` has
/// all leftmost, non-overlapping occurrences replaced. Value types are checked
/// before anything is modified, so a [`RewriteOutcome::Failed`] tree is still
/// identical to the decoded one.
///
/// # Examples
///
/// ```
/// use torrent_mover::bencode::{decode, encode};
/// use torrent_mover::rewrite::{rewrite, FileCategory, PathKeyConfig, RewriteOutcome};
///
/// let mut tree = decode(b"d9:directory30:/downloads/rTorrent/Temp/Moviee").unwrap();
/// let outcome = rewrite(
///     &mut tree,
///     &FileCategory::new("rtorrent"),
///     &PathKeyConfig::default(),
///     b"/downloads/rTorrent/Temp/",
///     b"/downloads/rTorrent/Movies/",
/// );
///
/// assert_eq!(outcome, RewriteOutcome::Changed(1));
/// assert_eq!(
///     encode(&tree).unwrap(),
///     b"d9:directory32:/downloads/rTorrent/Movies/Moviee"
/// );
/// ```
pub fn rewrite(
    tree: &mut Value,
    category: &FileCategory,
    config: &PathKeyConfig,
    src: &[u8],
    dst: &[u8],
) -> RewriteOutcome {
    let Some(keys) = config.keys_for(category) else {
        return RewriteOutcome::Skipped(SkipReason::UnknownCategory);
    };
    let Some(dict) = tree.as_dict_mut() else {
        return RewriteOutcome::Skipped(SkipReason::NoKeysFound);
    };

    let mut present = Vec::with_capacity(keys.len());
    for key in keys {
        match dict.get(key) {
            None => continue,
            Some(Value::Bytes(_)) => present.push(key),
            Some(other) => {
                return RewriteOutcome::Failed(KeyTypeError {
                    key: key.clone(),
                    found: other.type_name(),
                })
            }
        }
    }

    if present.is_empty() {
        return RewriteOutcome::Skipped(SkipReason::NoKeysFound);
    }

    let mut changed = 0;
    for key in present {
        if let Some(Value::Bytes(path)) = dict.get_mut(key) {
            if let Some(replaced) = replace_all(path, src, dst) {
                *path = Bytes::from(replaced);
                changed += 1;
            }
        }
    }

    if changed == 0 {
        RewriteOutcome::Unchanged
    } else {
        RewriteOutcome::Changed(changed)
    }
}

/// Replaces every leftmost, non-overlapping occurrence of `from` in `haystack`.
///
/// Returns `None` when `from` does not occur (an empty `from` never occurs).
///
/// ```
/// use torrent_mover::rewrite::replace_all;
///
/// assert_eq!(replace_all(b"aaaa", b"aa", b"b").as_deref(), Some(&b"bb"[..]));
/// assert_eq!(replace_all(b"/data", b"/tmp", b"/x"), None);
/// ```
pub fn replace_all(haystack: &[u8], from: &[u8], to: &[u8]) -> Option<Vec<u8>> {
    if from.is_empty() || from.len() > haystack.len() {
        return None;
    }

    let mut out = Vec::new();
    let mut copied = 0;
    let mut i = 0;
    while i + from.len() <= haystack.len() {
        if &haystack[i..i + from.len()] == from {
            out.extend_from_slice(&haystack[copied..i]);
            out.extend_from_slice(to);
            i += from.len();
            copied = i;
        } else {
            i += 1;
        }
    }

    if copied == 0 {
        return None;
    }

    out.extend_from_slice(&haystack[copied..]);
    Some(out)
}
