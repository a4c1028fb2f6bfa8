//! Error types for KML rendering and output.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for KML operations.
pub type KmlResult<T> = Result<T, KmlError>;

/// Errors that can occur while producing a KML file.
#[derive(Debug, Error)]
pub enum KmlError {
    /// Formatting into the in-memory document failed.
    #[error("Failed to render KML document: {0}")]
    Render(#[from] fmt::Error),

    /// The output directory does not exist or cannot be used.
    #[error("Output directory not usable: {}", path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the temporary file failed.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Moving the finished temporary file into place failed.
    #[error("Failed to save {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persist_display_names_path() {
        let err = KmlError::Persist {
            path: PathBuf::from("/tmp/out.kml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/out.kml"));
        assert!(msg.contains("denied"));
    }
}
