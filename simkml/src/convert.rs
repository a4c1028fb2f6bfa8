//! End-to-end conversion: export file in, KML file out.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{ConfigFile, ConfigFileError};
use crate::kml::{default_output_path, write_document, KmlDocument, KmlError};
use crate::source::{read_log, FlightLog, SimulatorKind, SourceError};
use crate::tracker::{track, FlightTrack, TrackError};

/// Any failure of a conversion run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Track(#[from] TrackError),

    #[error(transparent)]
    Kml(#[from] KmlError),

    #[error(transparent)]
    Config(#[from] ConfigFileError),

    /// The working directory could not be determined for the default path.
    #[error("Cannot determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),
}

/// What a conversion produced.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    pub simulator: SimulatorKind,
    pub output: PathBuf,
    pub rows: usize,
    pub segments: usize,
    pub markers: usize,
}

/// Read a log and run the tracker over it, without writing anything.
pub fn track_file(
    input: &Path,
    config: &ConfigFile,
) -> Result<(FlightLog, FlightTrack), ConvertError> {
    let log = read_log(input, &config.xplane)?;
    let flight = track(&log.rows)?;
    Ok((log, flight))
}

/// A log that was read and tracked, with its document built but not saved.
#[derive(Debug, Clone)]
pub struct Conversion {
    simulator: SimulatorKind,
    flight: FlightTrack,
    document: KmlDocument,
}

impl Conversion {
    /// Read, track and build the document for `input`.
    pub fn prepare(input: &Path, config: &ConfigFile) -> Result<Self, ConvertError> {
        let (log, flight) = track_file(input, config)?;
        let document = KmlDocument::from_track(log.created, &flight);
        Ok(Self {
            simulator: log.kind,
            flight,
            document,
        })
    }

    pub fn simulator(&self) -> SimulatorKind {
        self.simulator
    }

    pub fn flight(&self) -> &FlightTrack {
        &self.flight
    }

    pub fn document(&self) -> &KmlDocument {
        &self.document
    }

    /// Destination used when no output path is given.
    ///
    /// The file is named after the conversion timestamp and placed in the
    /// configured output directory, or the current working directory.
    pub fn default_output(&self, config: &ConfigFile) -> Result<PathBuf, ConvertError> {
        let dir = match &config.output.directory {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().map_err(ConvertError::CurrentDir)?,
        };
        Ok(default_output_path(&dir, &self.document))
    }

    /// Write the document to `output`.
    pub fn save(&self, output: &Path) -> Result<ConversionReport, ConvertError> {
        write_document(&self.document, output)?;

        let report = ConversionReport {
            simulator: self.simulator,
            output: output.to_path_buf(),
            rows: self.flight.rows(),
            segments: self.flight.segment_count(),
            markers: self.flight.marker_count(),
        };
        tracing::info!(
            output = %report.output.display(),
            simulator = %report.simulator,
            rows = report.rows,
            segments = report.segments,
            markers = report.markers,
            "Conversion complete"
        );
        Ok(report)
    }
}

/// Convert `input` and save the document.
///
/// Without an explicit `output`, [`Conversion::default_output`] decides the
/// destination. Nothing is written unless the whole event stream was
/// produced.
pub fn convert_file(
    input: &Path,
    output: Option<&Path>,
    config: &ConfigFile,
) -> Result<ConversionReport, ConvertError> {
    let conversion = Conversion::prepare(input, config)?;
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => conversion.default_output(config)?,
    };
    conversion.save(&output)
}
