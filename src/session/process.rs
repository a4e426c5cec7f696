use super::error::SessionError;
use super::relocation::Relocation;
use crate::bencode::{decode, encode_to};
use crate::rewrite::{rewrite, PathKeyConfig, RewriteOutcome, SkipReason};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Report what would change without writing anything.
    pub dry_run: bool,
}

/// Tally of a [`process_all`] run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub changed: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub failed: Vec<(PathBuf, SessionError)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.changed + self.unchanged + self.skipped + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Relocates the path keys of a single session file.
///
/// Files whose extension has no entry in `config` are skipped without being
/// read. Otherwise the file is read whole, decoded, rewritten and, only if
/// the outcome is [`RewriteOutcome::Changed`] and this is not a dry run,
/// encoded straight back into the file.
///
/// # Errors
///
/// Read/write failures, malformed bencode and path keys of the wrong type
/// are returned as errors. Read, decode and key type errors leave the file
/// on disk as it was.
pub fn process_file(
    path: &Path,
    config: &PathKeyConfig,
    relocation: &Relocation,
    options: ProcessOptions,
) -> Result<RewriteOutcome, SessionError> {
    let Some(category) = config.category_of(path) else {
        return Ok(RewriteOutcome::Skipped(SkipReason::UnknownCategory));
    };

    let data = fs::read(path).map_err(|source| SessionError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut tree = decode(&data).map_err(|source| SessionError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let outcome = rewrite(
        &mut tree,
        &category,
        config,
        relocation.src(),
        relocation.dst(),
    );

    match &outcome {
        RewriteOutcome::Failed(err) => {
            return Err(SessionError::KeyType {
                path: path.to_path_buf(),
                source: err.clone(),
            });
        }
        RewriteOutcome::Changed(keys) if !options.dry_run => {
            let io_err = |source: std::io::Error| SessionError::Io {
                path: path.to_path_buf(),
                source,
            };
            let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
            encode_to(&tree, &mut writer).map_err(|source| SessionError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
            writer.flush().map_err(io_err)?;
            debug!("Rewrote {} path key(s) in {}", keys, path.display());
        }
        _ => {}
    }

    Ok(outcome)
}

/// Runs [`process_file`] over every file, never stopping at a failure.
pub fn process_all(
    files: &[PathBuf],
    config: &PathKeyConfig,
    relocation: &Relocation,
    options: ProcessOptions,
) -> BatchReport {
    let mut report = BatchReport::default();

    for path in files {
        debug!("Processing file: {}", path.display());

        match process_file(path, config, relocation, options) {
            Ok(RewriteOutcome::Changed(_)) => {
                debug!("Processed successfully: {}", path.display());
                report.changed += 1;
            }
            Ok(RewriteOutcome::Unchanged) => {
                debug!("Source path not found in {}", path.display());
                report.unchanged += 1;
            }
            // Failed never comes back as Ok; process_file maps it to SessionError::KeyType.
            Ok(other) => {
                debug!("Skipped {} ({:?})", path.display(), other);
                report.skipped += 1;
            }
            Err(err) => {
                warn!("Problem processing {}: {}", path.display(), err);
                report.failed.push((path.clone(), err));
            }
        }
    }

    report
}
