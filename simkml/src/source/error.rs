//! Error types for reading simulator logs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for row source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors raised while turning a simulator export into rows.
///
/// Every variant is fatal for the conversion: segment boundaries depend on
/// complete, ordered rows, so nothing is skipped or repaired.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The log file could not be opened or inspected.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid delimited text.
    #[error("Malformed log data: {0}")]
    Csv(#[from] csv::Error),

    /// The file extension does not identify a supported simulator.
    #[error("Unknown file type '{extension}' (expected .txt for X-Plane 11 or .csv for FlightGear)")]
    UnknownSourceType { extension: String },

    /// A column required by the canonical schema is absent from the header.
    #[error("Column '{column}' not found in log header")]
    MissingColumn { column: String },

    /// A cell could not be parsed as a number.
    #[error("Line {line}: invalid value '{value}' in column '{column}'")]
    InvalidValue {
        line: u64,
        column: String,
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_source_type_display() {
        let err = SourceError::UnknownSourceType {
            extension: "gpx".to_string(),
        };
        assert!(err.to_string().contains("'gpx'"));
        assert!(err.to_string().contains(".txt"));
    }

    #[test]
    fn test_invalid_value_display() {
        let err = SourceError::InvalidValue {
            line: 12,
            column: "__VVI,__fpm".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Line 12: invalid value 'abc' in column '__VVI,__fpm'"
        );
    }

    #[test]
    fn test_io_error_display_includes_path() {
        let err = SourceError::Io {
            path: PathBuf::from("/tmp/Data.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/tmp/Data.txt"));
    }
}
