//! Package database error types

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum DatabaseError {
    #[error("local database not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read local database at {}: {message}", path.display())]
    ReadFailed { path: PathBuf, message: String },

    #[error("package entry {name} has no files list")]
    MissingFilesList { name: String },
}
