//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and the exit code.

use std::fmt;
use std::process;

use simkml::config::ConfigFileError;
use simkml::convert::ConvertError;
use simkml::source::SourceError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(ConfigFileError),
    /// Reading, tracking or writing failed
    Convert(ConvertError),
    /// Failed to write to stdout
    Output(std::io::Error),
    /// Failed to encode an event
    Serialize(serde_json::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Convert(ConvertError::Source(SourceError::UnknownSourceType { .. })) => {
                eprintln!();
                eprintln!("Supported inputs:");
                eprintln!("  .txt  X-Plane 11 Data.txt output");
                eprintln!("  .csv  FlightGear log (';'-separated)");
            }
            CliError::Convert(ConvertError::Source(SourceError::MissingColumn { .. })) => {
                eprintln!();
                eprintln!("For X-Plane logs, check that Data Output records the needed fields");
                eprintln!("and that the [xplane] section of the config file matches the headers.");
                eprintln!("Run 'simkml config path' to locate the config file.");
            }
            CliError::Config(_) => {
                eprintln!();
                eprintln!("Run 'simkml config path' to locate the config file.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Convert(e) => write!(f, "{}", e),
            CliError::Output(e) => write!(f, "Failed to write output: {}", e),
            CliError::Serialize(e) => write!(f, "Failed to encode event: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Convert(e) => Some(e),
            CliError::Output(e) => Some(e),
            CliError::Serialize(e) => Some(e),
            CliError::LoggingInit(_) => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<ConvertError> for CliError {
    fn from(e: ConvertError) -> Self {
        CliError::Convert(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_convert_error_display_is_transparent() {
        let err = CliError::from(ConvertError::Source(SourceError::UnknownSourceType {
            extension: "gpx".to_string(),
        }));
        assert!(err.to_string().contains("'gpx'"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_logging_init_has_no_source() {
        let err = CliError::LoggingInit("denied".to_string());
        assert_eq!(err.to_string(), "Failed to initialize logging: denied");
        assert!(err.source().is_none());
    }
}
