//! Default values and locations.

use std::path::PathBuf;

/// Name of the per-user configuration directory under `$HOME`.
pub const CONFIG_DIR_NAME: &str = ".simkml";

/// Configuration file name inside [`config_directory`].
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Default log file name inside [`config_directory`].
pub const DEFAULT_LOG_FILE_NAME: &str = "simkml.log";

/// Path to the config directory (`~/.simkml`).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Path to the config file (`~/.simkml/config.ini`).
pub fn config_file_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}

/// Default log file (`~/.simkml/simkml.log`).
pub fn default_log_file() -> PathBuf {
    config_directory().join(DEFAULT_LOG_FILE_NAME)
}
