//! Error types for trackplot

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::record::RecordError;

/// Result type for trackplot operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, projecting or plotting a track
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading an already opened input
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input file could not be opened
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input line does not have the `identifier lat lon alt` shape
    #[error("Malformed record on line {line}: {source}")]
    MalformedRecord {
        line: usize,
        #[source]
        source: RecordError,
    },

    /// Coordinate transformation error
    #[error("Projection error: {0}")]
    Projection(String),

    /// Plot could not be built from the given data
    #[error("Render error: {0}")]
    Render(String),

    /// Viewer window failed
    #[error("Display error: {0}")]
    Display(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Projection("test".to_string());
        assert_eq!(err.to_string(), "Projection error: test");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_open_error_names_path() {
        let err = Error::Open {
            path: PathBuf::from("proj/gps.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert!(err.to_string().starts_with("Cannot open proj/gps.txt"));
    }

    #[test]
    fn test_malformed_record_line() {
        let err = Error::MalformedRecord {
            line: 7,
            source: RecordError::FieldCount(3),
        };
        let message = err.to_string();
        assert!(message.contains("line 7"));
        assert!(message.contains("found 3"));
    }
}
