use super::error::SessionError;
use crate::rewrite::PathKeyConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Lists the session files directly inside `dir`.
///
/// Only regular files whose extension is a category in `config` are
/// returned; subdirectories are not descended into. The result is sorted.
///
/// # Errors
///
/// Returns [`SessionError::ReadDir`] if the directory cannot be listed.
pub fn list_session_files(dir: &Path, config: &PathKeyConfig) -> Result<Vec<PathBuf>, SessionError> {
    let read_dir_err = |source: std::io::Error| SessionError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.is_file() && config.category_of(&path).is_some() {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}
