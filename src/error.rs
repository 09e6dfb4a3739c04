use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::{CharSetError, LanguageError};

/// Errors that can occur in this crate.
#[derive(Debug)]
pub enum Error {
    /// An allowed-character specification was malformed
    CharSet(CharSetError),
    /// The report language could not be resolved
    Language(LanguageError),
    /// A template file could not be read
    Io {
        /// The file that failed to load
        path: PathBuf,
        /// The underlying I/O error
        source: io::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CharSet(e) => write!(f, "{}", e),
            Error::Language(e) => write!(f, "{}", e),
            Error::Io { path, source } => {
                write!(f, "failed to load '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::CharSet(e) => Some(e),
            Error::Language(e) => Some(e),
            Error::Io { source, .. } => Some(source),
        }
    }
}

impl From<CharSetError> for Error {
    fn from(e: CharSetError) -> Self {
        Error::CharSet(e)
    }
}

impl From<LanguageError> for Error {
    fn from(e: LanguageError) -> Self {
        Error::Language(e)
    }
}
