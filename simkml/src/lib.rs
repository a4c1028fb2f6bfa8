//! simkml - Flight simulator logs as Google Earth tracks
//!
//! This library turns a time-series flight log recorded by X-Plane 11 or
//! FlightGear into a KML document: colored ground/air/stall tracks plus
//! annotated placemarks for takeoff, touchdown, stalls, flap changes,
//! marker-beacon passes and heading/vertical-speed deviations.
//!
//! # Pipeline
//!
//! ```text
//! source (rows) ──► classify ──► tracker (fold) ──► Vec<TrackEvent> ──► kml ──► file
//! ```
//!
//! The [`tracker`] produces plain values and knows nothing about KML, so the
//! state machine can be exercised without touching the filesystem.

pub mod classify;
pub mod config;
pub mod convert;
pub mod coord;
pub mod kml;
pub mod logging;
pub mod source;
pub mod time;
pub mod tracker;

/// Crate version, as reported by the CLI banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
