use std::io;
use thiserror::Error;

/// Errors that occur while scanning an individual file.
///
/// Both variants are contained by the multi-file scan: a failing file is
/// reported and the scan moves on to the next one.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The supplied path does not exist. Logged as a warning, not counted
    /// as a violation.
    #[error("file not found: {path}")]
    NotFound { path: String },

    /// The file exists but could not be read as UTF-8 text (permissions,
    /// I/O failure, or invalid encoding).
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Classify an I/O error for the given path.
    pub fn from_io(path: &str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ScanError::NotFound {
                path: path.to_string(),
            }
        } else {
            ScanError::Read {
                path: path.to_string(),
                source,
            }
        }
    }
}
