//! pacsweep - find files not tracked by a pacman database
//!
//! This is the CLI application: it builds the membership index from the
//! local package database, then walks each search path in sequence,
//! printing every file the database does not own.

mod cli;
mod error;
mod logging;

use crate::cli::Cli;
use crate::error::CliError;
use clap::Parser;
use pacsweep_config::Config;
use pacsweep_walker::WalkContext;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.debug);

    if let Err(e) = run(cli) {
        error!("application error: {e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<(), CliError> {
    info!("starting pacsweep v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    apply_cli_config(&mut config, &cli);

    let index = pacsweep_alpm::load_tracked_paths(&config.scan.db)?;

    let ctx = WalkContext {
        root: &config.scan.root,
        index: &index,
        check_symlinks: config.scan.symlinks,
        silent: config.scan.quiet,
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for dir in &cli.paths {
        let start = relative_start(dir, &config.scan.root)?;
        pacsweep_walker::walk(&ctx, &start, &mut out)?;
    }
    out.flush()?;

    info!("search completed");
    Ok(())
}

/// Apply CLI flags on top of the loaded configuration.
fn apply_cli_config(config: &mut Config, cli: &Cli) {
    if let Some(root) = &cli.root {
        config.scan.root = root.clone();
    }
    if let Some(db) = &cli.db {
        config.scan.db = db.clone();
    }
    if cli.no_symlinks {
        config.scan.symlinks = false;
    }
    if cli.quiet {
        config.scan.quiet = true;
    }
}

/// Validate a search path and express it relative to the install root.
///
/// The index holds no trailing separators, so they are stripped here. A
/// search path outside the root could never match an index entry, so it
/// is rejected instead of silently reporting everything beneath it.
fn relative_start(dir: &Path, root: &Path) -> Result<PathBuf, CliError> {
    let trimmed = strip_trailing_slashes(dir);
    trimmed
        .strip_prefix(root)
        .map(Path::to_path_buf)
        .map_err(|_| {
            CliError::InvalidArguments(format!(
                "search path '{}' is not inside the install root '{}'",
                trimmed.display(),
                root.display()
            ))
        })
}

fn strip_trailing_slashes(path: &Path) -> &Path {
    let bytes = path.as_os_str().as_bytes();
    let mut end = bytes.len();
    while end > 1 && bytes[end - 1] == b'/' {
        end -= 1;
    }
    Path::new(OsStr::from_bytes(&bytes[..end]))
}
