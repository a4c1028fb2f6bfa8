//! The uniform row schema every simulator reader produces.

use serde::Serialize;

/// One flight log sample in canonical units.
///
/// Readers convert simulator-specific exports into this shape; nothing
/// downstream knows which simulator produced the row.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Row {
    /// Absolute time in seconds since the Unix epoch.
    pub time: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Barometric altitude in feet MSL.
    pub alt: f64,
    /// Height above ground level in feet.
    pub hgt: f64,
    /// Heading in degrees.
    pub hdg: f64,
    /// Indicated airspeed.
    pub ias: f64,
    /// Ground speed.
    pub gs: f64,
    /// True airspeed.
    pub tas: f64,
    /// Vertical speed in feet per minute.
    pub vs: f64,
    /// Flap deployment ratio (0.0 retracted, 1.0 fully extended).
    pub flaps: f64,
    /// Stall indicator; any positive value means the aircraft is stalling.
    pub stall: f64,
    /// Outer marker beacon received.
    pub outer_marker: bool,
    /// Middle marker beacon received.
    pub middle_marker: bool,
    /// Inner marker beacon received.
    pub inner_marker: bool,
}

impl Row {
    /// Names and values of the numeric fields, in schema order.
    ///
    /// Used for validation so a bad field can be reported by name.
    pub fn numeric_fields(&self) -> [(&'static str, f64); 12] {
        [
            ("time", self.time),
            ("lon", self.lon),
            ("lat", self.lat),
            ("alt", self.alt),
            ("hgt", self.hgt),
            ("hdg", self.hdg),
            ("ias", self.ias),
            ("gs", self.gs),
            ("tas", self.tas),
            ("vs", self.vs),
            ("flaps", self.flaps),
            ("stall", self.stall),
        ]
    }

    /// Whether any marker beacon is being received.
    pub fn any_marker(&self) -> bool {
        self.outer_marker || self.middle_marker || self.inner_marker
    }
}
