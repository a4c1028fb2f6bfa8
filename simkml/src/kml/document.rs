//! KML document model built from tracker events.

use std::fmt::{self, Write};

use super::error::KmlResult;
use super::style::{line_style, style_map, write_styles};
use super::xml_escape;
use crate::coord::round_display;
use crate::time::string_from_time;
use crate::tracker::{FlightTrack, Marker, MarkerFolder, Segment, TrackEvent};

/// Footer line of every placemark description.
pub const GENERATOR: &str = "Generated by simkml";

/// Document name for a conversion timestamp: `Flightlog dd-mm-YYYY HH.MM`.
///
/// Also the default output file stem, hence the `.` separator.
pub fn document_name(created: f64) -> String {
    format!("Flightlog {}", string_from_time(created, '.', false))
}

/// Name of the folder holding the tracks: `Flightlog dd-mm-YYYY HH:MM`.
pub fn flight_folder_name(first_time: f64) -> String {
    format!("Flightlog {}", string_from_time(first_time, ':', false))
}

/// A KML document ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct KmlDocument {
    name: String,
    flight_folder: String,
    tracks: Vec<Segment>,
    special: Vec<Marker>,
    data: Vec<Marker>,
}

impl KmlDocument {
    /// Sort tracker output into the document's folders.
    ///
    /// `created` is the conversion timestamp that names the document.
    pub fn from_track(created: f64, track: &FlightTrack) -> Self {
        let first_time = track.first_time().unwrap_or(created);
        let mut document = Self {
            name: document_name(created),
            flight_folder: flight_folder_name(first_time),
            tracks: Vec::new(),
            special: Vec::new(),
            data: Vec::new(),
        };

        for event in track.events() {
            match event {
                TrackEvent::TrackClosed(segment) => document.tracks.push(segment.clone()),
                TrackEvent::Marker(marker) => match marker.folder {
                    MarkerFolder::Special => document.special.push(marker.clone()),
                    MarkerFolder::Data => document.data.push(marker.clone()),
                },
            }
        }
        document
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flight_folder(&self) -> &str {
        &self.flight_folder
    }

    pub fn tracks(&self) -> &[Segment] {
        &self.tracks
    }

    pub fn special_placemarks(&self) -> &[Marker] {
        &self.special
    }

    pub fn data_placemarks(&self) -> &[Marker] {
        &self.data
    }

    /// Render the complete document as KML text.
    pub fn render(&self) -> KmlResult<String> {
        let mut out = String::with_capacity(4096 + 512 * (self.special.len() + self.data.len()));

        writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            out,
            r#"<kml xmlns="http://www.opengis.net/kml/2.2" xmlns:gx="http://www.google.com/kml/ext/2.2">"#
        )?;
        writeln!(out, "  <Document>")?;
        writeln!(out, "    <name>{}</name>", xml_escape(&self.name))?;
        write_styles(&mut out)?;

        writeln!(out, "    <Folder>")?;
        writeln!(out, "      <name>Flight</name>")?;
        writeln!(out, "      <Folder>")?;
        writeln!(out, "        <name>{}</name>", xml_escape(&self.flight_folder))?;
        for segment in &self.tracks {
            write_track(&mut out, segment)?;
        }
        writeln!(out, "      </Folder>")?;
        writeln!(out, "    </Folder>")?;

        write_marker_folder(&mut out, "Special placemarks", &self.special)?;
        write_marker_folder(&mut out, "Flight data", &self.data)?;

        writeln!(out, "  </Document>")?;
        writeln!(out, "</kml>")?;
        Ok(out)
    }
}

fn write_track(out: &mut String, segment: &Segment) -> fmt::Result {
    let airborne = segment.classification().airborne;
    let mode = if airborne { "absolute" } else { "clampToGround" };
    let coordinates: Vec<String> = segment.coordinates().iter().map(|c| c.to_string()).collect();

    writeln!(out, "        <Placemark>")?;
    writeln!(out, "          <name>{}</name>", xml_escape(segment.name()))?;
    writeln!(
        out,
        "          <styleUrl>#{}</styleUrl>",
        line_style(segment.classification()).id
    )?;
    writeln!(out, "          <LineString>")?;
    writeln!(out, "            <extrude>1</extrude>")?;
    writeln!(out, "            <tessellate>1</tessellate>")?;
    writeln!(out, "            <altitudeMode>{}</altitudeMode>", mode)?;
    writeln!(
        out,
        "            <coordinates>{}</coordinates>",
        coordinates.join(" ")
    )?;
    writeln!(out, "          </LineString>")?;
    writeln!(out, "        </Placemark>")
}

fn write_marker_folder(out: &mut String, name: &str, markers: &[Marker]) -> fmt::Result {
    writeln!(out, "    <Folder>")?;
    writeln!(out, "      <name>{}</name>", name)?;
    for marker in markers {
        write_point(out, marker)?;
    }
    writeln!(out, "    </Folder>")
}

fn write_point(out: &mut String, marker: &Marker) -> fmt::Result {
    let coordinate = marker.coordinate();
    let absolute = coordinate.is_airborne() && !marker.force_ground;

    writeln!(out, "      <Placemark>")?;
    if let Some(name) = &marker.name {
        writeln!(out, "        <name>{}</name>", xml_escape(name))?;
    }
    writeln!(
        out,
        "        <description><![CDATA[{}]]></description>",
        description(marker)
    )?;
    writeln!(out, "        <styleUrl>#{}</styleUrl>", style_map(marker.style).id)?;
    writeln!(out, "        <Point>")?;
    if absolute {
        writeln!(out, "          <altitudeMode>absolute</altitudeMode>")?;
    }
    writeln!(out, "          <coordinates>{}</coordinates>", coordinate)?;
    writeln!(out, "        </Point>")?;
    writeln!(out, "      </Placemark>")
}

/// HTML body shown in a placemark balloon.
///
/// Readings are rounded for display; altitudes stay in feet.
pub fn description(marker: &Marker) -> String {
    let row = &marker.row;
    let mut desc = String::new();
    if let Some(message) = &marker.message {
        desc.push_str(&format!("Event: {}<br><br>", xml_escape(message)));
    }
    desc.push_str(&format!(
        "Time/Date: {}<br>",
        string_from_time(row.time, ':', true)
    ));
    for (label, value) in [
        ("Hdg", row.hdg),
        ("IAS", row.ias),
        ("GS", row.gs),
        ("TAS", row.tas),
        ("Alt", row.alt),
        ("Alt AGL", row.hgt),
    ] {
        desc.push_str(&format!("{}: {}<br>", label, round_display(value)));
    }
    desc.push_str(&format!("VS: {}<br><br>", round_display(row.vs)));
    desc.push_str(GENERATOR);
    desc
}
