//! Simulator detection from the export's file name.

use std::fmt;
use std::path::Path;

use super::error::{SourceError, SourceResult};
use super::row::Row;

/// Offset FlightGear's logger reports on the ground, in feet.
///
/// Subtracting it puts a parked aircraft below the 1 ft airborne threshold.
const FLIGHTGEAR_ALTITUDE_BIAS_FT: f64 = 0.5;

/// Simulators whose exports can be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorKind {
    /// X-Plane 11 "Data.txt" output (`|`-separated, padded cells).
    XPlane11,
    /// FlightGear generic protocol log (`;`-separated).
    FlightGear,
}

impl SimulatorKind {
    /// Identify the simulator from the file extension.
    ///
    /// `.txt` is X-Plane 11, `.csv` is FlightGear; the comparison ignores case.
    pub fn from_path(path: &Path) -> SourceResult<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "txt" => Ok(SimulatorKind::XPlane11),
            "csv" => Ok(SimulatorKind::FlightGear),
            _ => Err(SourceError::UnknownSourceType { extension }),
        }
    }

    /// Field delimiter of the export.
    pub fn delimiter(&self) -> u8 {
        match self {
            SimulatorKind::XPlane11 => b'|',
            SimulatorKind::FlightGear => b';',
        }
    }

    /// Human-readable simulator name.
    pub fn name(&self) -> &'static str {
        match self {
            SimulatorKind::XPlane11 => "X-Plane 11",
            SimulatorKind::FlightGear => "FlightGear",
        }
    }

    /// Apply simulator-specific corrections to a freshly parsed row.
    pub(super) fn adjust(&self, row: &mut Row) {
        if let SimulatorKind::FlightGear = self {
            row.alt -= FLIGHTGEAR_ALTITUDE_BIAS_FT;
            row.hgt -= FLIGHTGEAR_ALTITUDE_BIAS_FT;
        }
    }
}

impl fmt::Display for SimulatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_extensions() {
        assert_eq!(
            SimulatorKind::from_path(Path::new("Data.txt")).unwrap(),
            SimulatorKind::XPlane11
        );
        assert_eq!(
            SimulatorKind::from_path(Path::new("/logs/c172.CSV")).unwrap(),
            SimulatorKind::FlightGear
        );
    }

    #[test]
    fn test_from_path_unknown_extension() {
        let err = SimulatorKind::from_path(Path::new("flight.igc")).unwrap_err();
        assert!(matches!(
            err,
            SourceError::UnknownSourceType { ref extension } if extension == "igc"
        ));

        let err = SimulatorKind::from_path(Path::new("no_extension")).unwrap_err();
        assert!(matches!(err, SourceError::UnknownSourceType { .. }));
    }

    #[test]
    fn test_flightgear_altitude_bias() {
        let mut row = Row {
            alt: 10.5,
            hgt: 1.2,
            ..Default::default()
        };
        SimulatorKind::FlightGear.adjust(&mut row);
        assert!((row.alt - 10.0).abs() < 1e-9);
        assert!((row.hgt - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_xplane_rows_untouched() {
        let mut row = Row {
            alt: 10.5,
            hgt: 1.2,
            ..Default::default()
        };
        SimulatorKind::XPlane11.adjust(&mut row);
        assert_eq!(row.alt, 10.5);
        assert_eq!(row.hgt, 1.2);
    }

    #[test]
    fn test_display() {
        assert_eq!(SimulatorKind::XPlane11.to_string(), "X-Plane 11");
        assert_eq!(SimulatorKind::FlightGear.to_string(), "FlightGear");
    }
}
