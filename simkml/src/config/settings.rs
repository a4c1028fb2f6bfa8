//! Settings structs held by [`ConfigFile`].

use std::path::PathBuf;

use super::defaults::default_log_file;
use crate::source::ColumnMap;

/// Complete user configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigFile {
    /// `[xplane]`: canonical field → X-Plane `Data.txt` header.
    pub xplane: ColumnMap,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputSettings {
    /// Directory for generated documents; `None` means the working directory.
    pub directory: Option<PathBuf>,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path.
    pub file: PathBuf,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: default_log_file(),
        }
    }
}

impl LoggingSettings {
    /// Split the log file into the directory and file name the appender wants.
    ///
    /// A bare file name logs into the current directory.
    pub fn split(&self) -> (PathBuf, String) {
        let dir = self
            .file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let name = self
            .file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        (dir, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_split() {
        let settings = LoggingSettings {
            file: PathBuf::from("/var/log/simkml/run.log"),
        };
        assert_eq!(
            settings.split(),
            (PathBuf::from("/var/log/simkml"), "run.log".to_string())
        );
    }

    #[test]
    fn test_logging_split_bare_name() {
        let settings = LoggingSettings {
            file: PathBuf::from("run.log"),
        };
        assert_eq!(settings.split(), (PathBuf::from("."), "run.log".to_string()));
    }
}
