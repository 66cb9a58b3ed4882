//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read config file {}: {message}", path.display())]
    ReadFailed { path: PathBuf, message: String },

    #[error("parse error: {message}")]
    ParseError { message: String },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}
