//! Shared KML styles.
//!
//! Colors are KML `aabbggrr`. Tracks get a plain line style; placemarks get
//! a style map with a normal and a highlighted variant.

use std::fmt::{self, Write};

use crate::classify::Classification;
use crate::tracker::MarkerStyle;

const ICON_BASE: &str = "http://maps.google.com/mapfiles/kml/shapes";

/// Line and polygon colors for a track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub id: &'static str,
    pub line_color: &'static str,
    pub width: f64,
    pub poly_color: &'static str,
}

/// Regular (non-stall) track.
pub const TRACK_NORMAL: LineStyle = LineStyle {
    id: "track_normal",
    line_color: "ff00ff00",
    width: 2.0,
    poly_color: "7fff0000",
};

/// Stall track.
pub const TRACK_STALL: LineStyle = LineStyle {
    id: "track_stall",
    line_color: "ff0000ff",
    width: 2.5,
    poly_color: "7f0000ff",
};

/// Icon style for one state of a placemark style map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconStyle {
    pub color: &'static str,
    pub scale: f64,
    pub icon: &'static str,
    pub label_color: Option<&'static str>,
}

/// Normal/highlight pair referenced by placemarks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleMap {
    pub id: &'static str,
    pub normal: IconStyle,
    pub highlight: IconStyle,
}

/// Log boundaries, transitions, flaps and beacons.
pub const SPECIAL: StyleMap = StyleMap {
    id: "special",
    normal: IconStyle {
        color: "ffff0000",
        scale: 0.6,
        icon: "cross-hairs.png",
        label_color: Some("ff7fffff"),
    },
    highlight: IconStyle {
        color: "ffff0000",
        scale: 0.6,
        icon: "cross-hairs_highlight.png",
        label_color: Some("ff7fffff"),
    },
};

/// Deviation data points.
pub const DATA: StyleMap = StyleMap {
    id: "data",
    normal: IconStyle {
        color: "ff0000ff",
        scale: 0.15,
        icon: "placemark_circle.png",
        label_color: None,
    },
    highlight: IconStyle {
        color: "ff0000ff",
        scale: 0.4,
        icon: "placemark_circle.png",
        label_color: None,
    },
};

/// Track style for a segment classification.
pub fn line_style(classification: Classification) -> &'static LineStyle {
    if classification.stalling {
        &TRACK_STALL
    } else {
        &TRACK_NORMAL
    }
}

/// Style map for a marker style category.
pub fn style_map(style: MarkerStyle) -> &'static StyleMap {
    match style {
        MarkerStyle::Special => &SPECIAL,
        MarkerStyle::Data => &DATA,
    }
}

/// Write every shared style into a document body.
pub fn write_styles(out: &mut String) -> fmt::Result {
    for line in [&TRACK_NORMAL, &TRACK_STALL] {
        write_line_style(out, line)?;
    }
    for map in [&SPECIAL, &DATA] {
        write_style_map(out, map)?;
    }
    Ok(())
}

fn write_line_style(out: &mut String, style: &LineStyle) -> fmt::Result {
    writeln!(out, r#"    <Style id="{}">"#, style.id)?;
    writeln!(
        out,
        "      <LineStyle><color>{}</color><width>{}</width></LineStyle>",
        style.line_color, style.width
    )?;
    writeln!(
        out,
        "      <PolyStyle><color>{}</color><outline>1</outline></PolyStyle>",
        style.poly_color
    )?;
    writeln!(out, "    </Style>")
}

fn write_icon_style(out: &mut String, id: &str, style: &IconStyle) -> fmt::Result {
    writeln!(out, r#"    <Style id="{}">"#, id)?;
    writeln!(
        out,
        "      <IconStyle><color>{}</color><scale>{}</scale><Icon><href>{}/{}</href></Icon></IconStyle>",
        style.color, style.scale, ICON_BASE, style.icon
    )?;
    if let Some(label) = style.label_color {
        writeln!(out, "      <LabelStyle><color>{}</color></LabelStyle>", label)?;
    }
    writeln!(out, "    </Style>")
}

fn write_style_map(out: &mut String, map: &StyleMap) -> fmt::Result {
    let normal = format!("{}_n", map.id);
    let highlight = format!("{}_h", map.id);
    write_icon_style(out, &normal, &map.normal)?;
    write_icon_style(out, &highlight, &map.highlight)?;

    writeln!(out, r#"    <StyleMap id="{}">"#, map.id)?;
    for (key, id) in [("normal", &normal), ("highlight", &highlight)] {
        writeln!(
            out,
            "      <Pair><key>{}</key><styleUrl>#{}</styleUrl></Pair>",
            key, id
        )?;
    }
    writeln!(out, "    </StyleMap>")
}
