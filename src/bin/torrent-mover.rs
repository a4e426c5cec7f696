//! torrent-mover CLI
//!
//! Moves the download location recorded in rTorrent (`*.rtorrent`) and
//! qBittorrent (`*.fastresume`) session files, after the data itself has been
//! moved on disk.

use anyhow::{bail, Context};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use torrent_mover::rewrite::{KeySpec, PathKeyConfig};
use torrent_mover::session::{self, ProcessOptions, Relocation};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "torrent-mover")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rewrite download paths stored in torrent client session files")]
#[command(after_help = "Example:\n  \
    torrent-mover --src /downloads/rTorrent/Temp/ --dst /downloads/rTorrent/Movies/ /config/rTorrent/session")]
struct Cli {
    /// The client's session folder
    #[arg(value_name = "SESSIONS_FOLDER")]
    sessions_folder: PathBuf,

    /// Source path to change from
    #[arg(long, value_name = "SRC")]
    src: String,

    /// Destination path to change to
    #[arg(long, value_name = "DST")]
    dst: String,

    /// Don't create a backup folder for sessions data
    #[arg(long)]
    no_backup: bool,

    /// Don't prompt; overwrite an existing backup
    #[arg(short, long)]
    yes: bool,

    /// Report what would change without writing any session file
    #[arg(long)]
    dry_run: bool,

    /// Path keys for an extension, overriding the defaults (repeatable)
    #[arg(short, long = "key", value_name = "EXT=KEY[,KEY...]")]
    keys: Vec<KeySpec>,

    /// Enable debug output
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    // --verbose wins; otherwise RUST_LOG, falling back to info.
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

fn prompt(message: &str) -> io::Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{message}")?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

fn backup(sessions: &Path, assume_yes: bool) -> anyhow::Result<()> {
    // Canonicalize so "." and trailing slashes still name a sibling folder.
    let sessions = sessions
        .canonicalize()
        .with_context(|| format!("cannot resolve {}", sessions.display()))?;
    let target = session::backup_path(&sessions);

    info!("Creating a backup for: {}", sessions.display());
    if target.exists() && !assume_yes {
        let answer = prompt("Backup folder already exists. Do you want to overwrite? [y/N] ")?;
        if !answer.eq_ignore_ascii_case("y") {
            info!("Chose not to overwrite backup");
            return Ok(());
        }
    }

    let copied = session::create_backup(&sessions, &target)
        .with_context(|| format!("cannot back up to {}", target.display()))?;
    info!("Backup created successfully ({} files in {})", copied, target.display());
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let relocation = Relocation::new(&cli.src, &cli.dst)
        .context("invalid --src/--dst")?;

    let mut config = PathKeyConfig::default();
    for spec in cli.keys {
        config.apply(spec);
    }

    if !cli.sessions_folder.is_dir() {
        bail!(
            "selected sessions folder {} doesn't exist",
            cli.sessions_folder.display()
        );
    }

    let files = session::list_session_files(&cli.sessions_folder, &config)?;
    if files.is_empty() {
        bail!("no session files found. Are you sure you specified the sessions folder?");
    }

    if !cli.yes {
        prompt("Please stop your torrent client (rTorrent / qBittorrent) before continuing! (Press Enter)")?;
    }

    if cli.no_backup || cli.dry_run {
        info!("Skipping backup folder");
    } else {
        backup(&cli.sessions_folder, cli.yes)?;
    }

    info!("Processing {} files..", files.len());
    let options = ProcessOptions {
        dry_run: cli.dry_run,
    };
    let report = session::process_all(&files, &config, &relocation, options);

    info!(
        "Finished processing files: {} changed, {} unchanged, {} skipped, {} failed{}",
        report.changed,
        report.unchanged,
        report.skipped,
        report.failed.len(),
        if cli.dry_run { " (dry run)" } else { "" }
    );
    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
