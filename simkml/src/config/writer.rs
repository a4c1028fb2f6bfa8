//! INI serialization: `ConfigFile` → commented INI text.

use std::fmt::Write;
use std::path::Path;

use super::settings::ConfigFile;
use crate::source::FIELDS;

/// Convert a `ConfigFile` to the commented INI text written to `config.ini`.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let mut out = String::new();

    out.push_str("[xplane]\n");
    out.push_str("; Canonical field = column header in X-Plane's Data.txt output.\n");
    out.push_str("; Change these when your Data Output selection writes different headers.\n");
    for (field, header) in FIELDS.iter().zip(config.xplane.headers()) {
        let _ = writeln!(out, "{} = {}", field, header);
    }

    let directory = config
        .output
        .directory
        .as_deref()
        .map(path_to_string)
        .unwrap_or_default();
    let _ = write!(
        out,
        r#"
[output]
; Directory for generated KML files.
; If empty, files are written to the current working directory.
directory = {}

[logging]
; Log file, cleared at the start of every run
file = {}
"#,
        directory,
        path_to_string(&config.logging.file)
    );

    out
}

/// Display a path with the home directory collapsed to `~`.
pub(super) fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
