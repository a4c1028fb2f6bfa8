//! Atomic KML output.
//!
//! The document is rendered in memory, written to a temporary file next to
//! the destination and renamed into place, so a failed conversion never
//! leaves a partial `.kml` behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::document::KmlDocument;
use super::error::{KmlError, KmlResult};

/// File extension of generated documents.
pub const KML_EXTENSION: &str = "kml";

/// Default destination: `<dir>/<document name>.kml`.
pub fn default_output_path(dir: &Path, document: &KmlDocument) -> PathBuf {
    dir.join(format!("{}.{}", document.name(), KML_EXTENSION))
}

/// Render and save a document, replacing any existing file.
pub fn write_document(document: &KmlDocument, path: &Path) -> KmlResult<()> {
    let content = document.render()?;
    write_atomic(path, content.as_bytes())?;

    tracing::info!(
        path = %path.display(),
        bytes = content.len(),
        tracks = document.tracks().len(),
        "KML document saved"
    );
    Ok(())
}

fn write_atomic(path: &Path, content: &[u8]) -> KmlResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut temp = NamedTempFile::new_in(&dir).map_err(|source| KmlError::OutputDirectory {
        path: dir.clone(),
        source,
    })?;

    temp.write_all(content)
        .and_then(|_| temp.flush())
        .map_err(|source| KmlError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    temp.persist(path).map_err(|e| KmlError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Row;
    use crate::tracker::track;
    use tempfile::TempDir;

    fn document() -> KmlDocument {
        let track = track(&[Row::default()]).unwrap();
        KmlDocument::from_track(1_680_703_629.0, &track)
    }

    #[test]
    fn test_default_output_path() {
        let path = default_output_path(Path::new("/data"), &document());
        assert_eq!(path, PathBuf::from("/data/Flightlog 05-04-2023 14.07.kml"));
    }

    #[test]
    fn test_write_document_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.kml");
        write_document(&document(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<name>Flightlog 05-04-2023 14.07</name>"));
        // Only the final file remains
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_document_replaces_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.kml");
        std::fs::write(&path, "old").unwrap();
        write_document(&document(), &path).unwrap();
        assert_ne!(std::fs::read_to_string(&path).unwrap(), "old");
    }

    #[test]
    fn test_missing_directory_leaves_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.kml");
        let err = write_document(&document(), &path).unwrap_err();
        assert!(matches!(err, KmlError::OutputDirectory { .. }));
        assert!(!path.exists());
    }
}
