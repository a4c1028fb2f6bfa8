//! KML document builder.
//!
//! Consumes tracker events only; the tracker has no knowledge of folders,
//! styles or files.
//!
//! ```text
//! Document "Flightlog <conversion time>"
//! ├── styles
//! ├── Folder "Flight"
//! │   └── Folder "Flightlog <first row time>"   one LineString per segment
//! ├── Folder "Special placemarks"
//! └── Folder "Flight data"
//! ```

mod document;
mod error;
mod style;
mod writer;

pub use document::{description, document_name, flight_folder_name, KmlDocument, GENERATOR};
pub use error::{KmlError, KmlResult};
pub use style::{
    line_style, style_map, IconStyle, LineStyle, StyleMap, DATA, SPECIAL, TRACK_NORMAL, TRACK_STALL,
};
pub use writer::{default_output_path, write_document, KML_EXTENSION};

/// Escape text for XML element content and attributes.
pub fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("T/D VS: -300"), "T/D VS: -300");
        assert_eq!(xml_escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&apos;");
    }
}
