#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for pacsweep
//!
//! This crate handles loading and merging configuration from:
//! - Default values (hard-coded, matching the historical CLI defaults)
//! - Configuration file (`/etc/pacsweep.toml`, or a `--config` override)
//! - CLI flags (applied by the caller, highest precedence)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use pacsweep_errors::{ConfigError, Result};

/// System-wide config location consulted when no `--config` is given.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/pacsweep.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Scan configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Root directory packages get installed under.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Location of the pacman database.
    #[serde(default = "default_db")]
    pub db: PathBuf,
    /// Check the package database for symlinks as well as regular files.
    #[serde(default = "default_symlinks")]
    pub symlinks: bool,
    /// Suppress diagnostics for unreadable directories.
    #[serde(default)]
    pub quiet: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            db: default_db(),
            symlinks: default_symlinks(),
            quiet: false,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("/")
}

fn default_db() -> PathBuf {
    PathBuf::from("/var/lib/pacman")
}

fn default_symlinks() -> bool {
    true
}

impl Config {
    /// Load configuration from an explicit path, from the system path
    /// when one exists, or fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing config file cannot be read or
    /// parsed. A missing system config is not an error; a missing
    /// explicit `path` is.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let system = Path::new(SYSTEM_CONFIG_PATH);
                if system.exists() {
                    Self::load(system)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid
    /// TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        Ok(config)
    }
}
