//! Marker beacon table.
//!
//! Outer, middle and inner markers are checked in that order; the first
//! beacon received wins when several flags are set on the same row.

use serde::Serialize;

use crate::source::Row;

/// ILS marker beacons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Beacon {
    Outer,
    Middle,
    Inner,
}

/// Beacons in priority order.
pub const BEACONS: [Beacon; 3] = [Beacon::Outer, Beacon::Middle, Beacon::Inner];

impl Beacon {
    /// Whether this beacon is received on the given row.
    pub fn received(&self, row: &Row) -> bool {
        match self {
            Beacon::Outer => row.outer_marker,
            Beacon::Middle => row.middle_marker,
            Beacon::Inner => row.inner_marker,
        }
    }

    /// Placemark name.
    pub fn name(&self) -> &'static str {
        match self {
            Beacon::Outer => "OM",
            Beacon::Middle => "MM",
            Beacon::Inner => "IM",
        }
    }

    /// Placemark event message.
    pub fn message(&self) -> &'static str {
        match self {
            Beacon::Outer => "Passed outer marker",
            Beacon::Middle => "Passed middle marker",
            Beacon::Inner => "Passed inner marker",
        }
    }

    /// Highest-priority beacon received on a row, if any.
    pub fn first_received(row: &Row) -> Option<Beacon> {
        BEACONS.into_iter().find(|b| b.received(row))
    }
}
