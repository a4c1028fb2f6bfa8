//! Timestamp formatting for document, folder and placemark names.

use chrono::{DateTime, Utc};

/// Format a Unix timestamp as UTC `dd-mm-YYYY HH<delim>MM[<delim>SS]`.
///
/// Fractional seconds are dropped. Timestamps chrono cannot represent fall
/// back to the Unix epoch rather than failing a conversion over a label.
///
/// # Example
///
/// ```
/// use simkml::time::string_from_time;
///
/// assert_eq!(string_from_time(0.0, '.', false), "01-01-1970 00.00");
/// assert_eq!(string_from_time(3723.9, ':', true), "01-01-1970 01:02:03");
/// ```
pub fn string_from_time(secs: f64, delim: char, with_seconds: bool) -> String {
    let dt: DateTime<Utc> = DateTime::from_timestamp(secs.floor() as i64, 0).unwrap_or_default();

    let pattern = if with_seconds {
        format!("%d-%m-%Y %H{delim}%M{delim}%S")
    } else {
        format!("%d-%m-%Y %H{delim}%M")
    };

    dt.format(&pattern).to_string()
}
