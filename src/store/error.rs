//! Preference storage errors.

use std::fmt;
use std::io;

/// Error returned when the preference store cannot be reached.
#[derive(Debug)]
pub enum StoreError {
    /// No backing location exists in this environment.
    Unavailable,
    /// The backing file could not be read or written.
    Io(io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "preference storage is unavailable"),
            StoreError::Io(err) => write!(f, "preference storage I/O failed: {}", err),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Unavailable => None,
            StoreError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err)
    }
}
