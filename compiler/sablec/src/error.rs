//! Driver errors.
//!
//! Lexical errors are not here: they are data in the scan output and part
//! of the report. These are the failures that stop the driver before or
//! instead of scanning.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("unexpected argument '{0}': only one source file is accepted")]
    UnexpectedArgument(String),

    #[error("missing source file")]
    MissingFile,
}

impl CliError {
    /// Classify an I/O failure on `path`.
    pub fn from_io(path: &str, error: io::Error) -> Self {
        let path = path.to_owned();
        match error.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Io {
                path,
                source: error,
            },
        }
    }
}
