use super::error::SessionError;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Returns the sibling backup directory for `dir`: `<dir>_backup`.
///
/// ```
/// use torrent_mover::session::backup_path;
/// use std::path::Path;
///
/// assert_eq!(
///     backup_path(Path::new("/config/rTorrent/session/")),
///     Path::new("/config/rTorrent/session_backup")
/// );
/// ```
pub fn backup_path(dir: &Path) -> PathBuf {
    let mut name = OsString::from(dir.components().as_path().as_os_str());
    name.push("_backup");
    PathBuf::from(name)
}

/// Recursively copies `src` into `dst`, returning the number of files copied.
///
/// An existing `dst` is merged into: files already there are overwritten,
/// files not present in `src` are kept. Symlinks are followed.
pub fn create_backup(src: &Path, dst: &Path) -> Result<usize, SessionError> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| SessionError::Io { path, source }
    };

    let mut copied = 0;
    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(io_err(&target))?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target).map_err(io_err(&target))?;
            copied += 1;
        }
    }

    tracing::debug!("Copied {} files from {} to {}", copied, src.display(), dst.display());
    Ok(copied)
}
