//! The segmentation state machine.
//!
//! # State Machine
//!
//! ```text
//! Empty --[first row]--> Open --[row]--> Open --[finish]--> Terminal
//! ```
//!
//! Each step consumes the previous [`Snapshot`] and returns a new one; no
//! state survives outside the value passed through the fold.
//!
//! # Per-row Rules (in order)
//!
//! 1. Transition: classification changed → close segment, open a new one,
//!    emit the transition marker.
//! 2. Flaps: a change arms the detector; the first repeated value emits
//!    one "flaps settled" marker.
//! 3. Beacons: outer → middle → inner, one pass per continuous reception.
//! 4. Deviation: heading moved > 10° or, airborne, vertical speed moved
//!    > 150 fpm since the last baseline → data point.

use super::beacon::Beacon;
use super::error::{TrackError, TrackResult};
use super::event::{EventKind, Marker, Segment, TrackEvent};
use crate::classify::Classification;
use crate::coord::{round_display, Coordinate};
use crate::source::Row;

/// Heading change that triggers a data point (degrees).
pub const HEADING_DEVIATION_DEG: f64 = 10.0;

/// Vertical speed change that triggers a data point while airborne (ft/min).
pub const VERTICAL_SPEED_DEVIATION_FPM: f64 = 150.0;

/// Facts carried from one row to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    /// Classification of the previous row.
    pub classification: Classification,
    /// Heading at the last transition, beacon pass or deviation.
    pub hdg_baseline: f64,
    /// Vertical speed at the last transition, beacon pass or deviation.
    pub vs_baseline: f64,
    /// Previous row's altitude (ft MSL).
    pub alt: f64,
    /// Previous row's AGL height (ft).
    pub hgt: f64,
    /// Previous row's flap position.
    pub flaps: f64,
    /// A flap change started and has not settled yet.
    pub flaps_moving: bool,
    /// A beacon pass was emitted and reception has not dropped since.
    pub over_marker: bool,
}

impl Snapshot {
    /// Snapshot after the first row.
    pub fn initial(row: &Row) -> Self {
        Self {
            classification: Classification::of(row),
            hdg_baseline: row.hdg,
            vs_baseline: row.vs,
            alt: row.alt,
            hgt: row.hgt,
            flaps: row.flaps,
            flaps_moving: false,
            over_marker: false,
        }
    }

    fn with_baselines(self, row: &Row) -> Self {
        Self {
            hdg_baseline: row.hdg,
            vs_baseline: row.vs,
            ..self
        }
    }
}

/// Tracker lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerState {
    /// No row consumed yet.
    Empty,
    /// Exactly one segment is open.
    Open {
        snapshot: Snapshot,
        segment: Segment,
        last: Row,
    },
    /// The final segment and stop marker were emitted.
    Terminal,
}

impl TrackerState {
    /// Consume one row, appending any events it triggers to `out`.
    pub fn step(self, row: &Row, out: &mut Vec<TrackEvent>) -> TrackResult<TrackerState> {
        match self {
            TrackerState::Empty => {
                let segment = Segment::open(Classification::of(row), Coordinate::of(row));
                out.push(TrackEvent::Marker(Marker::new(EventKind::StartOfLog, *row)));
                Ok(TrackerState::Open {
                    snapshot: Snapshot::initial(row),
                    segment,
                    last: *row,
                })
            }
            TrackerState::Open {
                snapshot, segment, ..
            } => {
                let (snapshot, segment) = advance(snapshot, segment, row, out);
                Ok(TrackerState::Open {
                    snapshot,
                    segment,
                    last: *row,
                })
            }
            TrackerState::Terminal => Err(TrackError::AlreadyFinished),
        }
    }

    /// Close the open segment and emit the stop marker.
    pub fn finish(self, out: &mut Vec<TrackEvent>) -> TrackResult<TrackerState> {
        match self {
            TrackerState::Empty => Err(TrackError::EmptyLog),
            TrackerState::Open {
                mut segment, last, ..
            } => {
                segment.push(Coordinate::of(&last));
                out.push(TrackEvent::TrackClosed(segment));
                out.push(TrackEvent::Marker(Marker::new(EventKind::StopOfLog, last)));
                Ok(TrackerState::Terminal)
            }
            TrackerState::Terminal => Err(TrackError::AlreadyFinished),
        }
    }
}

/// Name the transition between two different classifications.
///
/// Stall changes take precedence over air/ground changes.
pub fn transition_kind(previous: Classification, current: Classification) -> EventKind {
    if current.stalling && !previous.stalling {
        EventKind::StallEnter
    } else if !current.stalling && previous.stalling {
        EventKind::StallRecover
    } else if current.airborne && !previous.airborne {
        EventKind::Takeoff
    } else {
        EventKind::Touchdown
    }
}

fn advance(
    prev: Snapshot,
    mut segment: Segment,
    row: &Row,
    out: &mut Vec<TrackEvent>,
) -> (Snapshot, Segment) {
    let classification = Classification::of(row);
    let here = Coordinate::of(row);
    let mut next = prev;
    // Latest name/message emitted for this row; inherited by a deviation point.
    let mut label: Option<(String, String)> = None;

    if classification != prev.classification {
        // Landing: join the tracks at the last airborne altitude.
        let boundary = if prev.classification.airborne && !classification.airborne {
            Coordinate::from_fix(row.lon, row.lat, prev.alt, prev.hgt)
        } else {
            here
        };

        let mut closed = std::mem::replace(&mut segment, Segment::open(classification, here));
        closed.push(boundary);
        out.push(TrackEvent::TrackClosed(closed));

        let kind = transition_kind(prev.classification, classification);
        let force_ground = !classification.stalling && !prev.classification.stalling;
        let marker = Marker::new(kind, *row).with_force_ground(force_ground);

        tracing::debug!(
            from = %prev.classification,
            to = %classification,
            time = row.time,
            "Segment transition"
        );

        label = marker.label();
        out.push(TrackEvent::Marker(marker));
        next = next.with_baselines(row);
    }

    if row.flaps != prev.flaps && !prev.flaps_moving {
        next.flaps_moving = true;
    } else if row.flaps == prev.flaps && prev.flaps_moving {
        let percent = round_display(row.flaps * 100.0);
        let marker = Marker::new(EventKind::FlapsSettled { percent }, *row);
        label = marker.label();
        segment.push(here);
        out.push(TrackEvent::Marker(marker));
        next.flaps_moving = false;
    }
    next.flaps = row.flaps;

    if !prev.over_marker {
        if let Some(beacon) = Beacon::first_received(row) {
            let marker = Marker::new(EventKind::BeaconPass(beacon), *row);
            label = marker.label();
            segment.push(here);
            out.push(TrackEvent::Marker(marker));
            next = next.with_baselines(row);
            next.over_marker = true;
        }
    }
    if !row.any_marker() {
        next.over_marker = false;
    }

    let hdg_dev = (next.hdg_baseline - row.hdg).abs();
    let vs_dev = (next.vs_baseline - row.vs).abs();
    if hdg_dev > HEADING_DEVIATION_DEG
        || (classification.airborne && vs_dev > VERTICAL_SPEED_DEVIATION_FPM)
    {
        segment.push(here);
        out.push(TrackEvent::Marker(
            Marker::new(EventKind::Deviation, *row).with_label(label),
        ));
        next = next.with_baselines(row);
    }

    next.classification = classification;
    next.alt = row.alt;
    next.hgt = row.hgt;

    (next, segment)
}
