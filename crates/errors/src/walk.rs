//! Traversal error types
//!
//! Permission-denied directory opens are deliberately not represented
//! here: the walker downgrades those to a skipped subtree. Everything
//! below aborts the whole walk.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum WalkError {
    #[error("cannot open directory {}: {message}", path.display())]
    DirectoryOpen { path: PathBuf, message: String },

    #[error("cannot read entries of {}: {message}", path.display())]
    ReadEntries { path: PathBuf, message: String },

    #[error("cannot determine file type of {}: {message}", path.display())]
    FileType { path: PathBuf, message: String },

    #[error("could not resolve file type of {}", path.display())]
    UnresolvedFileType { path: PathBuf },

    #[error("failed to write result line: {message}")]
    Output { message: String },
}
