//! INI parsing: `Ini` → `ConfigFile`.
//!
//! The single place where INI key names are mapped to struct fields.

use std::path::PathBuf;

use ini::Ini;

use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::source::FIELDS;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [xplane] section
    if let Some(section) = ini.section(Some("xplane")) {
        for (key, value) in section.iter() {
            let field = key.trim().to_lowercase();
            let header = value.trim();
            if header.is_empty() {
                return Err(invalid("xplane", key, value, "column header must not be empty"));
            }
            match config.xplane.header_mut(&field) {
                Some(slot) => *slot = header.to_string(),
                None => {
                    return Err(invalid(
                        "xplane",
                        key,
                        value,
                        &format!("unknown field, expected one of: {}", FIELDS.join(", ")),
                    ))
                }
            }
        }

        let headers = config.xplane.headers();
        for (i, header) in headers.iter().enumerate() {
            if let Some(j) = headers[..i].iter().position(|h| h == header) {
                return Err(invalid(
                    "xplane",
                    FIELDS[i],
                    header,
                    &format!("header already mapped to '{}'", FIELDS[j]),
                ));
            }
        }
    }

    // [output] section
    if let Some(section) = ini.section(Some("output")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.output.directory = Some(expand_tilde(v));
            }
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                let file = expand_tilde(v);
                if file.file_name().is_none() {
                    return Err(invalid("logging", "file", v, "must name a file"));
                }
                config.logging.file = file;
            }
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
