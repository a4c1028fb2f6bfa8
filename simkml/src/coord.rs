//! Coordinate helpers for KML output.
//!
//! KML wants `longitude,latitude[,altitude]` with altitude in meters. Ground
//! samples are written without altitude so Google Earth clamps them to the
//! terrain.

use std::fmt;

use serde::Serialize;

use crate::classify::airborne;
use crate::source::Row;

/// Feet to meters.
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Convert feet to meters.
#[inline]
pub fn meters(feet: f64) -> f64 {
    feet * METERS_PER_FOOT
}

/// Round a reading for display, halves to even.
///
/// Applied to every number shown to the user (placemark names and
/// descriptions) so `0.125` flaps reads "12%" and `-2.5` fpm reads "-2".
#[inline]
pub fn round_display(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// A point on a track or placemark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Altitude in meters MSL; `None` for samples on the ground.
    pub alt_m: Option<f64>,
}

impl Coordinate {
    /// Build a coordinate from a position fix.
    ///
    /// Altitude is only kept when `hgt_ft` classifies the fix as airborne.
    pub fn from_fix(lon: f64, lat: f64, alt_ft: f64, hgt_ft: f64) -> Self {
        Self {
            lon,
            lat,
            alt_m: airborne(hgt_ft).then(|| meters(alt_ft)),
        }
    }

    /// Coordinate of a log row.
    pub fn of(row: &Row) -> Self {
        Self::from_fix(row.lon, row.lat, row.alt, row.hgt)
    }

    /// Whether the coordinate carries an altitude.
    pub fn is_airborne(&self) -> bool {
        self.alt_m.is_some()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alt_m {
            Some(alt) => write!(f, "{},{},{}", self.lon, self.lat, alt),
            None => write!(f, "{},{}", self.lon, self.lat),
        }
    }
}
