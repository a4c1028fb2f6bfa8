//! Per-row flight state classification.
//!
//! # Detection Logic
//!
//! ```text
//! Airborne: AGL > 1ft
//! Stalling: stall indicator > 0
//! ```
//!
//! The 1 ft margin keeps ground rollout and small bounces "on ground".
//! Both facts are independent; a stall on the ground is still a stall.

use std::fmt;

use serde::Serialize;

use crate::source::Row;

/// AGL height above which a sample counts as airborne (feet).
pub const AIRBORNE_AGL_THRESHOLD_FT: f64 = 1.0;

/// Whether a sample at this AGL height is airborne.
#[inline]
pub fn airborne(hgt: f64) -> bool {
    hgt > AIRBORNE_AGL_THRESHOLD_FT
}

/// Whether the stall indicator reports a stall.
#[inline]
pub fn stalling(stall: f64) -> bool {
    stall > 0.0
}

/// Display name for a track segment.
///
/// Stall wins over altitude: a stalling segment is always "Stall!!".
pub fn segment_label(airborne: bool, stalling: bool) -> &'static str {
    if stalling {
        "Stall!!"
    } else if airborne {
        "In the air"
    } else {
        "On Ground"
    }
}

/// The `(airborne, stalling)` pair that defines a track segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Classification {
    pub airborne: bool,
    pub stalling: bool,
}

impl Classification {
    pub fn new(airborne: bool, stalling: bool) -> Self {
        Self { airborne, stalling }
    }

    /// Classify a single row.
    pub fn of(row: &Row) -> Self {
        Self {
            airborne: airborne(row.hgt),
            stalling: stalling(row.stall),
        }
    }

    /// Segment display name.
    pub fn label(&self) -> &'static str {
        segment_label(self.airborne, self.stalling)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
