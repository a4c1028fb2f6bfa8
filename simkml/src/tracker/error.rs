//! Error types for the segment tracker.

use thiserror::Error;

/// Result type for tracker operations.
pub type TrackResult<T> = Result<T, TrackError>;

/// Input the tracker refuses to segment.
///
/// Segment boundaries depend on strictly ordered, complete rows, so the
/// tracker never repairs input; any of these aborts the conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackError {
    /// No rows at all, so there is nothing to anchor a start marker to.
    #[error("Flight log contains no rows")]
    EmptyLog,

    /// A row is older than the one before it.
    #[error("Row {index}: time {current} is earlier than previous row time {previous}")]
    NonMonotonicTime {
        index: usize,
        previous: f64,
        current: f64,
    },

    /// A numeric field is NaN or infinite.
    #[error("Row {index}: field '{field}' is not a finite number")]
    NonFiniteField { index: usize, field: &'static str },

    /// Rows were pushed after the stream was closed.
    #[error("Tracker already finished")]
    AlreadyFinished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_monotonic_display() {
        let err = TrackError::NonMonotonicTime {
            index: 7,
            previous: 12.5,
            current: 12.0,
        };
        assert_eq!(
            err.to_string(),
            "Row 7: time 12 is earlier than previous row time 12.5"
        );
    }

    #[test]
    fn test_empty_log_display() {
        assert_eq!(TrackError::EmptyLog.to_string(), "Flight log contains no rows");
    }
}
