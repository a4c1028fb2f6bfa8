//! Row source: simulator exports as a uniform, ordered row sequence.
//!
//! # Supported Formats
//!
//! | Extension | Simulator  | Delimiter | Header names                 |
//! |-----------|------------|-----------|------------------------------|
//! | `.txt`    | X-Plane 11 | `\|`      | configurable (`[xplane]`)    |
//! | `.csv`    | FlightGear | `;`       | fixed canonical short names  |
//!
//! Exports carry time relative to the start of recording. The file's
//! modification time is added to every row so placemarks show wall-clock
//! time; the same instant names the generated document.

mod columns;
mod error;
mod kind;
mod reader;
mod row;

pub use columns::{ColumnMap, FIELDS};
pub use error::{SourceError, SourceResult};
pub use kind::SimulatorKind;
pub use reader::read_rows;
pub use row::Row;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::UNIX_EPOCH;

/// A fully read simulator export.
#[derive(Debug, Clone)]
pub struct FlightLog {
    /// Simulator that produced the export.
    pub kind: SimulatorKind,
    /// Rows in file order, with absolute timestamps.
    pub rows: Vec<Row>,
    /// File modification time in seconds since the Unix epoch.
    pub created: f64,
}

/// Read a simulator export from disk.
///
/// The simulator is detected from the extension before the file is opened,
/// so an unknown type fails without touching the file contents.
/// `xplane_columns` is only consulted for X-Plane exports.
pub fn read_log(path: &Path, xplane_columns: &ColumnMap) -> SourceResult<FlightLog> {
    let kind = SimulatorKind::from_path(path)?;
    let created = modification_time(path)?;

    let file = File::open(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let columns = match kind {
        SimulatorKind::XPlane11 => xplane_columns.clone(),
        SimulatorKind::FlightGear => ColumnMap::flightgear(),
    };

    let rows = read_rows(BufReader::new(file), kind, &columns, created)?;

    tracing::info!(
        path = %path.display(),
        simulator = %kind,
        rows = rows.len(),
        "Loaded flight log"
    );

    Ok(FlightLog {
        kind,
        rows,
        created,
    })
}

/// File modification time in seconds since the Unix epoch.
pub fn modification_time(path: &Path) -> SourceResult<f64> {
    let modified = std::fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(modified
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_log_uses_mtime_offset() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("flight.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "time;lon;lat;alt;hgt;hdg;ias;gs;tas;vs;flp;stl;om;mm;im").unwrap();
        writeln!(file, "2.0;10;50;100.5;0.5;90;0;0;0;0;0;0;0;0;0").unwrap();
        drop(file);

        let created = modification_time(&path).unwrap();
        let log = read_log(&path, &ColumnMap::xplane11()).unwrap();

        assert_eq!(log.kind, SimulatorKind::FlightGear);
        assert_eq!(log.rows.len(), 1);
        assert!((log.created - created).abs() < 1e-6);
        assert!((log.rows[0].time - (created + 2.0)).abs() < 1e-6);
    }

    #[test]
    fn test_read_log_unknown_extension_before_open() {
        // The file does not exist: detection must fail first.
        let err = read_log(Path::new("/nonexistent/log.json"), &ColumnMap::default()).unwrap_err();
        assert!(matches!(err, SourceError::UnknownSourceType { .. }));
    }

    #[test]
    fn test_read_log_missing_file() {
        let err = read_log(Path::new("/nonexistent/Data.txt"), &ColumnMap::default()).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }
}
