//! Values the tracker emits: closed segments and placemark markers.

use serde::Serialize;

use super::beacon::Beacon;
use crate::classify::Classification;
use crate::coord::{round_display, Coordinate};
use crate::source::Row;

/// A finished track: consecutive rows sharing one classification.
///
/// The coordinate list is never empty; it starts with the coordinate of the
/// row that opened the segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    classification: Classification,
    coordinates: Vec<Coordinate>,
}

impl Segment {
    /// Open a segment seeded with its first coordinate.
    pub fn open(classification: Classification, seed: Coordinate) -> Self {
        Self {
            classification,
            coordinates: vec![seed],
        }
    }

    pub(crate) fn push(&mut self, coordinate: Coordinate) {
        self.coordinates.push(coordinate);
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// Display name ("On Ground", "In the air" or "Stall!!").
    pub fn name(&self) -> &'static str {
        self.classification.label()
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// First coordinate (the row that opened the segment).
    pub fn first(&self) -> Coordinate {
        self.coordinates[0]
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Never true for a segment built by the tracker.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

/// What a marker records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    StartOfLog,
    StopOfLog,
    StallEnter,
    StallRecover,
    Takeoff,
    Touchdown,
    /// Flaps stopped moving at this position (rounded percent).
    FlapsSettled { percent: i64 },
    BeaconPass(Beacon),
    /// Heading or vertical speed moved past its threshold.
    Deviation,
}

impl EventKind {
    /// Placemark name and event message, or `None` for unnamed data points.
    pub fn label(&self, row: &Row) -> Option<(String, String)> {
        let (name, message) = match self {
            EventKind::StartOfLog => ("Start log".to_string(), "Started logging".to_string()),
            EventKind::StopOfLog => ("Stop log".to_string(), "Logging stopped".to_string()),
            EventKind::StallEnter => ("Stall!!".to_string(), "Stall!!".to_string()),
            EventKind::StallRecover => {
                ("Recovered".to_string(), "Recovered from stall".to_string())
            }
            EventKind::Takeoff => ("T/O".to_string(), "Takeoff".to_string()),
            EventKind::Touchdown => (
                format!("T/D VS: {}", round_display(row.vs)),
                "Touchdown".to_string(),
            ),
            EventKind::FlapsSettled { percent } => {
                (format!("Flaps {}%", percent), format!("Flaps set to {}%", percent))
            }
            EventKind::BeaconPass(beacon) => {
                (beacon.name().to_string(), beacon.message().to_string())
            }
            EventKind::Deviation => return None,
        };
        Some((name, message))
    }

    /// Whether this kind opens or closes a segment.
    pub fn is_transition(&self) -> bool {
        matches!(
            self,
            EventKind::StallEnter
                | EventKind::StallRecover
                | EventKind::Takeoff
                | EventKind::Touchdown
        )
    }
}

/// Placemark folder a marker belongs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerFolder {
    /// Log boundaries, transitions and flap settings.
    Special,
    /// Beacon passes and deviation data points.
    Data,
}

/// Opaque style choice for a marker; the document builder maps it to KML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStyle {
    Special,
    Data,
}

/// A standalone annotated point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub row: Row,
    pub kind: EventKind,
    pub name: Option<String>,
    pub message: Option<String>,
    /// Pin the point to the ground regardless of AGL height.
    pub force_ground: bool,
    pub folder: MarkerFolder,
    pub style: MarkerStyle,
}

impl Marker {
    /// Create a marker with the name, folder and style its kind implies.
    pub fn new(kind: EventKind, row: Row) -> Self {
        let (folder, style) = match kind {
            EventKind::BeaconPass(_) => (MarkerFolder::Data, MarkerStyle::Special),
            EventKind::Deviation => (MarkerFolder::Data, MarkerStyle::Data),
            _ => (MarkerFolder::Special, MarkerStyle::Special),
        };
        let (name, message) = match kind.label(&row) {
            Some((name, message)) => (Some(name), Some(message)),
            None => (None, None),
        };

        Self {
            row,
            kind,
            name,
            message,
            force_ground: false,
            folder,
            style,
        }
    }

    pub fn with_force_ground(mut self, force_ground: bool) -> Self {
        self.force_ground = force_ground;
        self
    }

    /// Borrow a name and message emitted earlier on the same row.
    pub fn with_label(mut self, label: Option<(String, String)>) -> Self {
        if let Some((name, message)) = label {
            self.name = Some(name);
            self.message = Some(message);
        }
        self
    }

    /// Name and message, when both are set.
    pub fn label(&self) -> Option<(String, String)> {
        match (&self.name, &self.message) {
            (Some(name), Some(message)) => Some((name.clone(), message.clone())),
            _ => None,
        }
    }

    /// Coordinate of the triggering row.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::of(&self.row)
    }
}

/// Output of the tracker, in emission order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TrackEvent {
    /// A segment ended; ownership passes to the consumer.
    TrackClosed(Segment),
    Marker(Marker),
}

impl TrackEvent {
    pub fn as_segment(&self) -> Option<&Segment> {
        match self {
            TrackEvent::TrackClosed(segment) => Some(segment),
            TrackEvent::Marker(_) => None,
        }
    }

    pub fn as_marker(&self) -> Option<&Marker> {
        match self {
            TrackEvent::Marker(marker) => Some(marker),
            TrackEvent::TrackClosed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_with_vs(vs: f64) -> Row {
        Row {
            vs,
            ..Default::default()
        }
    }

    #[test]
    fn test_touchdown_label_rounds_vertical_speed() {
        let (name, message) = EventKind::Touchdown.label(&row_with_vs(-312.6)).unwrap();
        assert_eq!(name, "T/D VS: -313");
        assert_eq!(message, "Touchdown");
    }

    #[test]
    fn test_flaps_label() {
        let (name, message) = EventKind::FlapsSettled { percent: 25 }
            .label(&Row::default())
            .unwrap();
        assert_eq!(name, "Flaps 25%");
        assert_eq!(message, "Flaps set to 25%");
    }

    #[test]
    fn test_deviation_is_unnamed() {
        let marker = Marker::new(EventKind::Deviation, Row::default());
        assert!(marker.name.is_none());
        assert!(marker.message.is_none());
        assert_eq!(marker.folder, MarkerFolder::Data);
        assert_eq!(marker.style, MarkerStyle::Data);
    }

    #[test]
    fn test_beacon_marker_goes_to_data_folder_with_special_style() {
        let marker = Marker::new(EventKind::BeaconPass(Beacon::Outer), Row::default());
        assert_eq!(marker.folder, MarkerFolder::Data);
        assert_eq!(marker.style, MarkerStyle::Special);
        assert_eq!(marker.name.as_deref(), Some("OM"));
    }

    #[test]
    fn test_with_label_overrides_only_when_present() {
        let marker = Marker::new(EventKind::Deviation, Row::default()).with_label(None);
        assert!(marker.label().is_none());

        let marker = Marker::new(EventKind::Deviation, Row::default())
            .with_label(Some(("Flaps 10%".to_string(), "Flaps set to 10%".to_string())));
        assert_eq!(marker.name.as_deref(), Some("Flaps 10%"));
    }

    #[test]
    fn test_segment_keeps_seed_first() {
        let class = Classification::new(false, false);
        let seed = Coordinate::from_fix(1.0, 2.0, 0.0, 0.0);
        let mut segment = Segment::open(class, seed);
        segment.push(Coordinate::from_fix(1.1, 2.1, 0.0, 0.0));

        assert_eq!(segment.first(), seed);
        assert_eq!(segment.len(), 2);
        assert_eq!(segment.name(), "On Ground");
        assert!(!segment.is_empty());
    }

    #[test]
    fn test_transition_kinds() {
        assert!(EventKind::Takeoff.is_transition());
        assert!(EventKind::StallRecover.is_transition());
        assert!(!EventKind::StartOfLog.is_transition());
        assert!(!EventKind::Deviation.is_transition());
    }
}
