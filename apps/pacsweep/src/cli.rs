//! Command line interface definition

use clap::Parser;
use std::path::PathBuf;

/// pacsweep - find files not tracked by a pacman database
#[derive(Parser)]
#[command(name = "pacsweep")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search directories for files no installed package owns")]
#[command(long_about = None)]
pub struct Cli {
    /// Directories to search, walked in sequence
    #[arg(value_name = "DIR", required = true)]
    pub paths: Vec<PathBuf>,

    /// Root directory for package installations
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Location of the pacman database
    #[arg(short, long, value_name = "DIR")]
    pub db: Option<PathBuf>,

    /// Disable checking the package database for symlinks
    #[arg(short = 'n', long)]
    pub no_symlinks: bool,

    /// Disable printing an error upon access failures
    #[arg(short, long)]
    pub quiet: bool,

    /// Use alternate config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging to stderr
    #[arg(long)]
    pub debug: bool,
}
