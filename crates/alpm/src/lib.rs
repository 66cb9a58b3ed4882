#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Pacman local-database file lists
//!
//! Reads `<db>/local/<package>/files` directly instead of linking
//! libalpm. The format is plain text: a `%FILES%` section header followed
//! by one installation-root-relative path per line, terminated by a blank
//! line or the next `%SECTION%` header. Directory entries carry a
//! trailing slash and are kept verbatim; the walker only ever queries
//! file and symlink paths, so they cost memory but never change results.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::os::unix::ffi::OsStringExt;
use std::path::Path;

use pacsweep_errors::{DatabaseError, Result};
use pacsweep_index::TrackedPathSet;
use tracing::{debug, info};

/// Load every path owned by an installed package into a membership index.
///
/// # Errors
///
/// Returns an error if `<db>/local` is missing or unreadable, or if any
/// package entry lacks a readable `files` list. A database this tool
/// cannot read completely would make the report falsely reassuring, so
/// there is no partial loading.
pub fn load_tracked_paths(db_path: &Path) -> Result<TrackedPathSet> {
    let local = db_path.join("local");
    let entries = fs::read_dir(&local).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DatabaseError::NotFound { path: local.clone() },
        _ => DatabaseError::ReadFailed {
            path: local.clone(),
            message: e.to_string(),
        },
    })?;

    let mut index = TrackedPathSet::new();
    let mut packages = 0usize;
    for entry in entries {
        let entry = entry.map_err(|e| DatabaseError::ReadFailed {
            path: local.clone(),
            message: e.to_string(),
        })?;
        let file_type = entry.file_type().map_err(|e| DatabaseError::ReadFailed {
            path: entry.path(),
            message: e.to_string(),
        })?;
        // `local/` also holds ALPM_DB_VERSION; only package dirs matter.
        if !file_type.is_dir() {
            continue;
        }

        let files_path = entry.path().join("files");
        let data = fs::read(&files_path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DatabaseError::MissingFilesList {
                name: entry.file_name().to_string_lossy().into_owned(),
            },
            _ => DatabaseError::ReadFailed {
                path: files_path.clone(),
                message: e.to_string(),
            },
        })?;

        let before = index.len();
        parse_files_list(&data, &mut index);
        debug!(
            package = %entry.file_name().to_string_lossy(),
            paths = index.len() - before,
            "loaded package files list"
        );
        packages += 1;
    }

    info!(packages, paths = index.len(), "loaded local database");
    Ok(index)
}

/// Collect the `%FILES%` section of one package's `files` list.
///
/// Paths are byte strings and go into the index unmodified; any
/// normalization here would break the exact-match contract.
fn parse_files_list(data: &[u8], index: &mut TrackedPathSet) {
    let mut in_files = false;
    for line in data.split(|&byte| byte == b'\n') {
        if line.is_empty() {
            in_files = false;
        } else if line.first() == Some(&b'%') && line.last() == Some(&b'%') {
            in_files = line == b"%FILES%";
        } else if in_files {
            index.insert(OsString::from_vec(line.to_vec()));
        }
    }
}
