#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Recursive filesystem traversal against the tracked-path index
//!
//! The walker visits a subtree depth-first, classifies every entry from
//! the type hint the directory enumeration already carries (an explicit
//! status query happens only when the hint is missing), and streams every
//! regular file (and optionally symlink) whose root-relative path the
//! index does not contain.
//!
//! This is hand-rolled rather than an off-the-shelf directory iterator
//! because the policy is load-bearing: symlinks must be distinguishable
//! from regular files without a stat per entry, a permission-denied
//! directory skips exactly one subtree, and every other failure aborts
//! the whole walk.

mod entry;

pub use entry::EntryKind;

use std::fs;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use pacsweep_errors::{Result, WalkError};
use pacsweep_index::TrackedPathSet;
use tracing::{debug, warn};

/// Shared, read-only context for one walk invocation.
pub struct WalkContext<'a> {
    /// Installation root the index paths are relative to.
    pub root: &'a Path,
    /// Paths owned by installed packages.
    pub index: &'a TrackedPathSet,
    /// Report symlinks under the same absence rule as regular files.
    pub check_symlinks: bool,
    /// Suppress permission-denied diagnostics.
    pub silent: bool,
}

/// Walk the subtree at `start`, expressed relative to `ctx.root`, writing
/// one root-qualified line per untracked file to `out`.
///
/// The caller must hand in `start` without trailing separators; index
/// entries carry none, and membership is exact byte equality. Results
/// stream out in directory-enumeration order as the traversal proceeds.
/// A directory that cannot be opened for lack of permission is diagnosed
/// on stderr (unless `ctx.silent`) and contributes nothing; it does not
/// fail the walk.
///
/// # Errors
///
/// Any other failure is fatal and aborts the whole walk: opening a
/// directory, reading its entry stream, an entry whose file type cannot
/// be resolved even by the fallback query, or a failed write to `out`.
pub fn walk(ctx: &WalkContext<'_>, start: &Path, out: &mut dyn Write) -> Result<()> {
    let mut rel = start.to_path_buf();
    debug!(path = %qualify(ctx.root, &rel).display(), "walking subtree");
    walk_dir(ctx, &mut rel, out)
}

/// One recursion level: enumerate a single directory and dispatch on the
/// type of each entry. `rel` is the shared path buffer; this level pushes
/// and pops only its own final segment.
fn walk_dir(ctx: &WalkContext<'_>, rel: &mut PathBuf, out: &mut dyn Write) -> Result<()> {
    let dir_path = qualify(ctx.root, rel);

    // The handle is owned by this level and closed on every exit path,
    // bounding open descriptors by tree depth rather than breadth.
    let entries = match fs::read_dir(&dir_path) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            if !ctx.silent {
                eprintln!(
                    "Cannot open directory '{}': permission denied",
                    dir_path.display()
                );
            }
            warn!(path = %dir_path.display(), "skipping unreadable directory");
            return Ok(());
        }
        Err(e) => {
            return Err(WalkError::DirectoryOpen {
                path: dir_path,
                message: e.to_string(),
            }
            .into());
        }
    };

    // `read_dir` already skips the reflexive `.` and `..` entries.
    for dir_entry in entries {
        // A failed entry stream leaves the directory partially
        // enumerated; continuing would silently drop files.
        let dir_entry = dir_entry.map_err(|e| WalkError::ReadEntries {
            path: dir_path.clone(),
            message: e.to_string(),
        })?;

        let kind = entry::classify(&dir_entry)?;

        rel.push(dir_entry.file_name());
        let result = handle_entry(ctx, rel, kind, out);
        rel.pop();
        result?;
    }

    Ok(())
}

fn handle_entry(
    ctx: &WalkContext<'_>,
    rel: &mut PathBuf,
    kind: EntryKind,
    out: &mut dyn Write,
) -> Result<()> {
    match kind {
        EntryKind::Dir => walk_dir(ctx, rel, out),
        EntryKind::File => report_if_untracked(ctx, rel, out),
        EntryKind::Symlink if ctx.check_symlinks => report_if_untracked(ctx, rel, out),
        // Symlinks with checking disabled, device nodes, fifos and
        // sockets are neither reportable nor errors.
        _ => Ok(()),
    }
}

/// Membership query and output for a single file or symlink.
fn report_if_untracked(ctx: &WalkContext<'_>, rel: &Path, out: &mut dyn Write) -> Result<()> {
    if ctx.index.contains(rel) {
        return Ok(());
    }

    // Paths are byte strings; print them unmodified rather than lossily.
    let full = ctx.root.join(rel);
    out.write_all(full.as_os_str().as_bytes())
        .and_then(|()| out.write_all(b"\n"))
        .map_err(|e| WalkError::Output {
            message: e.to_string(),
        })?;
    Ok(())
}

/// Re-qualify a root-relative path for opening and printing. `rel` is
/// empty when the search path is the install root itself.
fn qualify(root: &Path, rel: &Path) -> PathBuf {
    if rel.as_os_str().is_empty() {
        root.to_path_buf()
    } else {
        root.join(rel)
    }
}
