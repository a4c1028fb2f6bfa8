//! Segment tracker: the single forward pass that cuts a flight log into
//! tracks and annotated markers.
//!
//! # Architecture
//!
//! ```text
//! Row ──► SegmentTracker::push ──► TrackerState::step ──► Vec<TrackEvent>
//!              │ validate                  │ Snapshot in, Snapshot out
//!              ▼                           ▼
//!          TrackError             TrackClosed(Segment) | Marker(Marker)
//! ```
//!
//! The tracker knows nothing about KML. It produces pure values in row
//! order; within a row, a transition always precedes flap, beacon and
//! deviation markers.
//!
//! # Example
//!
//! ```
//! use simkml::source::Row;
//! use simkml::tracker::track;
//!
//! let rows: Vec<Row> = [0.0, 0.0, 5.0, 5.0, 0.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &hgt)| Row { time: i as f64, hgt, ..Default::default() })
//!     .collect();
//!
//! let flight = track(&rows).unwrap();
//! assert_eq!(flight.segment_count(), 3);
//! ```

mod beacon;
mod error;
mod event;
mod state;

pub use beacon::{Beacon, BEACONS};
pub use error::{TrackError, TrackResult};
pub use event::{EventKind, Marker, MarkerFolder, MarkerStyle, Segment, TrackEvent};
pub use state::{
    transition_kind, Snapshot, TrackerState, HEADING_DEVIATION_DEG, VERTICAL_SPEED_DEVIATION_FPM,
};

use crate::source::Row;

/// Streaming wrapper around [`TrackerState`] that validates each row.
///
/// Rows must be finite and ordered by time. Any violation is fatal; the
/// tracker never skips or repairs a row.
#[derive(Debug)]
pub struct SegmentTracker {
    state: TrackerState,
    events: Vec<TrackEvent>,
    previous_time: Option<f64>,
    rows: usize,
}

impl Default for SegmentTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentTracker {
    pub fn new() -> Self {
        Self {
            state: TrackerState::Empty,
            events: Vec::new(),
            previous_time: None,
            rows: 0,
        }
    }

    /// Feed the next row.
    pub fn push(&mut self, row: &Row) -> TrackResult<()> {
        if matches!(self.state, TrackerState::Terminal) {
            return Err(TrackError::AlreadyFinished);
        }
        self.validate(row)?;

        let state = std::mem::replace(&mut self.state, TrackerState::Terminal);
        self.state = state.step(row, &mut self.events)?;
        self.previous_time = Some(row.time);
        self.rows += 1;
        Ok(())
    }

    /// Close the last segment and return everything emitted.
    pub fn finish(mut self) -> TrackResult<FlightTrack> {
        let state = std::mem::replace(&mut self.state, TrackerState::Terminal);
        state.finish(&mut self.events)?;

        let track = FlightTrack {
            events: self.events,
            rows: self.rows,
        };
        tracing::debug!(
            rows = track.rows,
            segments = track.segment_count(),
            markers = track.marker_count(),
            "Tracker finished"
        );
        Ok(track)
    }

    fn validate(&self, row: &Row) -> TrackResult<()> {
        let index = self.rows;
        if let Some((field, _)) = row.numeric_fields().into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(TrackError::NonFiniteField { index, field });
        }
        if let Some(previous) = self.previous_time {
            if row.time < previous {
                return Err(TrackError::NonMonotonicTime {
                    index,
                    previous,
                    current: row.time,
                });
            }
        }
        Ok(())
    }
}

/// Run the tracker over a complete row sequence.
pub fn track(rows: &[Row]) -> TrackResult<FlightTrack> {
    if rows.is_empty() {
        return Err(TrackError::EmptyLog);
    }
    let mut tracker = SegmentTracker::new();
    for row in rows {
        tracker.push(row)?;
    }
    tracker.finish()
}

/// Result of a tracker run.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightTrack {
    events: Vec<TrackEvent>,
    rows: usize,
}

impl FlightTrack {
    /// All events in emission order.
    pub fn events(&self) -> &[TrackEvent] {
        &self.events
    }

    /// Number of rows consumed.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.events.iter().filter_map(TrackEvent::as_segment)
    }

    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.events.iter().filter_map(TrackEvent::as_marker)
    }

    pub fn segment_count(&self) -> usize {
        self.segments().count()
    }

    pub fn marker_count(&self) -> usize {
        self.markers().count()
    }

    /// Time of the first row (the start-of-log marker).
    pub fn first_time(&self) -> Option<f64> {
        self.markers().next().map(|m| m.row.time)
    }
}
