//! Validation failures raised while resolving settings

use std::path::PathBuf;
use thiserror::Error;

/// Every way resolution can fail. All of them abort startup; none is retried.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("unknown module identifier '{0}'")]
    UnknownModule(String),

    #[error("module '{0}' is listed more than once")]
    DuplicateModule(String),

    #[error("required field '{0}' is missing")]
    MissingField(&'static str),

    #[error("invalid compatibilityDate '{0}': expected a calendar date in YYYY-MM-DD form")]
    InvalidDate(String),

    #[error("invalid {field} '{value}': {reason}")]
    InvalidUrl { field: &'static str, value: String, reason: &'static str },

    #[error("malformed settings in {origin}: {message}")]
    Malformed { origin: String, message: String },

    #[error("unsupported settings file extension '.{extension}' for {}", .path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("failed reading settings file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
