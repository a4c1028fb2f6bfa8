//! Mapping from raw export headers to canonical row fields.

use csv::StringRecord;

use super::error::{SourceError, SourceResult};

/// Canonical field names, in the order [`ColumnMap::headers`] returns them.
pub const FIELDS: [&str; 15] = [
    "time", "lon", "lat", "alt", "hgt", "hdg", "ias", "gs", "tas", "vs", "flaps", "stall", "om",
    "mm", "im",
];

/// Raw header name for each canonical row field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub time: String,
    pub lon: String,
    pub lat: String,
    pub alt: String,
    pub hgt: String,
    pub hdg: String,
    pub ias: String,
    pub gs: String,
    pub tas: String,
    pub vs: String,
    pub flaps: String,
    pub stall: String,
    pub outer_marker: String,
    pub middle_marker: String,
    pub inner_marker: String,
}

impl ColumnMap {
    /// Headers written by X-Plane 11's "Data.txt" output.
    pub fn xplane11() -> Self {
        Self {
            time: "_totl,_time".to_string(),
            lon: "__lon,__deg".to_string(),
            lat: "__lat,__deg".to_string(),
            alt: "__alt,ftmsl".to_string(),
            hgt: "__alt,ftagl".to_string(),
            hdg: "hding,_true".to_string(),
            ias: "_Vind,_kias".to_string(),
            gs: "Vtrue,_ktgs".to_string(),
            tas: "Vtrue,_ktas".to_string(),
            vs: "__VVI,__fpm".to_string(),
            flaps: "flap2,postn".to_string(),
            stall: "stall,_warn".to_string(),
            outer_marker: "outer,marke".to_string(),
            middle_marker: "middl,marke".to_string(),
            inner_marker: "inner,marke".to_string(),
        }
    }

    /// Headers of the FlightGear logging protocol shipped with simkml.
    pub fn flightgear() -> Self {
        Self {
            time: "time".to_string(),
            lon: "lon".to_string(),
            lat: "lat".to_string(),
            alt: "alt".to_string(),
            hgt: "hgt".to_string(),
            hdg: "hdg".to_string(),
            ias: "ias".to_string(),
            gs: "gs".to_string(),
            tas: "tas".to_string(),
            vs: "vs".to_string(),
            flaps: "flp".to_string(),
            stall: "stl".to_string(),
            outer_marker: "om".to_string(),
            middle_marker: "mm".to_string(),
            inner_marker: "im".to_string(),
        }
    }

    /// Raw headers in canonical field order (see [`FIELDS`]).
    pub fn headers(&self) -> [&str; 15] {
        [
            self.time.as_str(),
            self.lon.as_str(),
            self.lat.as_str(),
            self.alt.as_str(),
            self.hgt.as_str(),
            self.hdg.as_str(),
            self.ias.as_str(),
            self.gs.as_str(),
            self.tas.as_str(),
            self.vs.as_str(),
            self.flaps.as_str(),
            self.stall.as_str(),
            self.outer_marker.as_str(),
            self.middle_marker.as_str(),
            self.inner_marker.as_str(),
        ]
    }

    /// Mutable access to the header of a canonical field, by name.
    pub fn header_mut(&mut self, field: &str) -> Option<&mut String> {
        let slot = match field {
            "time" => &mut self.time,
            "lon" => &mut self.lon,
            "lat" => &mut self.lat,
            "alt" => &mut self.alt,
            "hgt" => &mut self.hgt,
            "hdg" => &mut self.hdg,
            "ias" => &mut self.ias,
            "gs" => &mut self.gs,
            "tas" => &mut self.tas,
            "vs" => &mut self.vs,
            "flaps" => &mut self.flaps,
            "stall" => &mut self.stall,
            "om" => &mut self.outer_marker,
            "mm" => &mut self.middle_marker,
            "im" => &mut self.inner_marker,
            _ => return None,
        };
        Some(slot)
    }

    /// Locate every mapped column in a header record.
    ///
    /// Columns not named by the map are ignored. Returns the record index of
    /// each canonical field, in [`FIELDS`] order.
    pub fn resolve(&self, header: &StringRecord) -> SourceResult<[usize; 15]> {
        let mut indices = [0usize; 15];
        for (slot, wanted) in indices.iter_mut().zip(self.headers()) {
            *slot = header
                .iter()
                .position(|h| h == wanted)
                .ok_or_else(|| SourceError::MissingColumn {
                    column: wanted.to_string(),
                })?;
        }
        Ok(indices)
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::xplane11()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_ignores_extra_columns() {
        let map = ColumnMap::flightgear();
        let header = StringRecord::from(vec![
            "extra", "time", "lon", "lat", "alt", "hgt", "hdg", "ias", "gs", "tas", "vs", "flp",
            "stl", "om", "mm", "im",
        ]);
        let indices = map.resolve(&header).unwrap();
        assert_eq!(indices[0], 1);
        assert_eq!(indices[14], 15);
    }

    #[test]
    fn test_xplane_heading_header() {
        // "pitch, roll, headings" Data Output row
        assert_eq!(ColumnMap::xplane11().hdg, "hding,_true");
    }

    #[test]
    fn test_resolve_reports_missing_column() {
        let map = ColumnMap::flightgear();
        let header = StringRecord::from(vec!["time", "lon", "lat"]);
        match map.resolve(&header) {
            Err(SourceError::MissingColumn { column }) => assert_eq!(column, "alt"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_header_mut_by_field_name() {
        let mut map = ColumnMap::xplane11();
        *map.header_mut("flaps").unwrap() = "flap1,postn".to_string();
        assert_eq!(map.flaps, "flap1,postn");
        assert!(map.header_mut("nonsense").is_none());
    }

    #[test]
    fn test_headers_follow_field_order() {
        let map = ColumnMap::flightgear();
        assert_eq!(map.headers()[10], "flp");
        assert_eq!(FIELDS[10], "flaps");
    }
}
