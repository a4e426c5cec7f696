use super::error::KeySpecError;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Classification of a session file, taken from its extension.
///
/// The category is stored without the leading dot, so `FileCategory::new(".rtorrent")`
/// and `FileCategory::new("rtorrent")` are the same category.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileCategory(String);

impl FileCategory {
    pub fn new(extension: &str) -> Self {
        Self(extension.trim_start_matches('.').to_owned())
    }

    /// Returns the category of `path` based on its extension, whether or not
    /// any configuration knows about it.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension().and_then(|e| e.to_str()).map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.0)
    }
}

/// Which root-dictionary keys hold a download path, per file category.
///
/// Keys are tried in the order they were configured. The default table covers
/// the two clients whose session directories are commonly relocated:
///
/// | Extension | Client | Keys |
/// |-----------|--------|------|
/// | `.rtorrent` | rTorrent | `directory` |
/// | `.fastresume` | qBittorrent | `qBt-savePath`, `save_path` |
///
/// # Examples
///
/// ```
/// use torrent_mover::rewrite::{FileCategory, PathKeyConfig};
/// use std::path::Path;
///
/// let mut config = PathKeyConfig::default();
/// config.insert(FileCategory::new("resume"), ["path"]);
///
/// let category = config.category_of(Path::new("session/abc.resume")).unwrap();
/// assert_eq!(config.keys_for(&category).unwrap().len(), 1);
/// assert!(config.category_of(Path::new("session/abc.torrent")).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathKeyConfig {
    categories: BTreeMap<FileCategory, Vec<Bytes>>,
}

impl PathKeyConfig {
    /// Creates a configuration with no categories.
    pub fn new() -> Self {
        Self {
            categories: BTreeMap::new(),
        }
    }

    /// Sets the path keys for `category`, replacing any previous entry.
    pub fn insert<I, K>(&mut self, category: FileCategory, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        let keys = keys
            .into_iter()
            .map(|k| Bytes::copy_from_slice(k.as_ref()))
            .collect();
        self.categories.insert(category, keys);
    }

    pub fn apply(&mut self, spec: KeySpec) {
        self.categories.insert(spec.category, spec.keys);
    }

    pub fn keys_for(&self, category: &FileCategory) -> Option<&[Bytes]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Returns the category of `path` if it is one this configuration handles.
    pub fn category_of(&self, path: &Path) -> Option<FileCategory> {
        FileCategory::from_path(path).filter(|c| self.categories.contains_key(c))
    }

    pub fn categories(&self) -> impl Iterator<Item = &FileCategory> {
        self.categories.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for PathKeyConfig {
    fn default() -> Self {
        let mut config = Self::new();
        config.insert(FileCategory::new("rtorrent"), ["directory"]);
        config.insert(FileCategory::new("fastresume"), ["qBt-savePath", "save_path"]);
        config
    }
}

/// A single category override in `EXT=KEY[,KEY...]` form.
///
/// ```
/// use torrent_mover::rewrite::KeySpec;
///
/// let spec: KeySpec = ".fastresume=save_path".parse().unwrap();
/// assert_eq!(spec.category.as_str(), "fastresume");
/// assert_eq!(spec.keys.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpec {
    pub category: FileCategory,
    pub keys: Vec<Bytes>,
}

impl FromStr for KeySpec {
    type Err = KeySpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ext, keys) = s
            .split_once('=')
            .ok_or_else(|| KeySpecError::MissingSeparator(s.to_owned()))?;

        let category = FileCategory::new(ext.trim());
        if category.as_str().is_empty() {
            return Err(KeySpecError::EmptyCategory(s.to_owned()));
        }

        let keys: Vec<Bytes> = keys
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(|k| Bytes::copy_from_slice(k.as_bytes()))
            .collect();
        if keys.is_empty() {
            return Err(KeySpecError::EmptyKeys(category.as_str().to_owned()));
        }

        Ok(Self { category, keys })
    }
}
