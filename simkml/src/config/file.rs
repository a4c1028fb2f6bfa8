//! Configuration file handling for `~/.simkml/config.ini`.
//!
//! A missing file means defaults. Settings structs live in
//! [`super::settings`], parsing in [`super::parser`] and serialization in
//! [`super::writer`].

use std::path::Path;

use ini::Ini;
use thiserror::Error;

use super::defaults::config_file_path;
use super::settings::ConfigFile;
use super::writer::path_to_string;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read or parse the config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write the config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create the config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (`~/.simkml/config.ini`).
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Create a default config file at `path` if it doesn't exist.
    ///
    /// Returns true when a new file was written.
    pub fn ensure_exists_at(path: &Path) -> Result<bool, ConfigFileError> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        tracing::info!(path = %path.display(), "Created default config file");
        Ok(true)
    }

    /// Effective settings as `(section, key, value)` triples, in file order.
    pub fn entries(&self) -> Vec<(&'static str, &'static str, String)> {
        let mut entries: Vec<(&'static str, &'static str, String)> = crate::source::FIELDS
            .iter()
            .zip(self.xplane.headers())
            .map(|(field, header)| ("xplane", *field, header.to_string()))
            .collect();

        entries.push((
            "output",
            "directory",
            self.output
                .directory
                .as_deref()
                .map(path_to_string)
                .unwrap_or_default(),
        ));
        entries.push(("logging", "file", path_to_string(&self.logging.file)));
        entries
    }
}
