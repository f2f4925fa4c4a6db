//! Error type wrapping format failures and filesystem failures

use dmat_core::DmatError;
use std::fmt;

/// Errors returned by persistence and selective-read operations
#[derive(Debug)]
pub enum Error {
    /// Underlying open/seek/read/write failure
    Io(std::io::Error),
    /// Format-level failure: short read, truncated data, bad index, bad shape
    Format(DmatError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o failure: {err}"),
            Error::Format(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Format(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<DmatError> for Error {
    fn from(err: DmatError) -> Self {
        Error::Format(err)
    }
}

/// Result type for DMAT I/O operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The format-level error kind, if this is not an I/O failure
    pub fn format_kind(&self) -> Option<DmatError> {
        match self {
            Error::Format(kind) => Some(*kind),
            Error::Io(_) => None,
        }
    }
}
