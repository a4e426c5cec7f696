//! Relocating a whole session directory.
//!
//! This is the file-system side of the tool: finding session files,
//! backing the directory up, and running each file through the
//! [`bencode`](crate::bencode) codec and the [`rewrite`](crate::rewrite)
//! engine. Files are independent; a failure in one is recorded in the
//! [`BatchReport`] and the rest are still processed.
//!
//! # Examples
//!
//! ```no_run
//! use torrent_mover::rewrite::PathKeyConfig;
//! use torrent_mover::session::{self, ProcessOptions, Relocation};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = Path::new("/config/rTorrent/session");
//! let config = PathKeyConfig::default();
//! let relocation = Relocation::new("/downloads/Temp/", "/downloads/Movies/")?;
//!
//! session::create_backup(dir, &session::backup_path(dir))?;
//! let files = session::list_session_files(dir, &config)?;
//! let report = session::process_all(&files, &config, &relocation, ProcessOptions::default());
//! println!("{} of {} files changed", report.changed, report.total());
//! # Ok(())
//! # }
//! ```

mod backup;
mod error;
mod process;
mod relocation;
mod scan;

pub use backup::{backup_path, create_backup};
pub use error::SessionError;
pub use process::{process_all, process_file, BatchReport, ProcessOptions};
pub use relocation::Relocation;
pub use scan::list_session_files;
