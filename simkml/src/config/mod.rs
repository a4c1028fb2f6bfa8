//! User configuration.
//!
//! ```ini
//! [xplane]
//! time = _totl,_time
//! ...
//! [output]
//! directory =
//! [logging]
//! file = ~/.simkml/simkml.log
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    config_directory, config_file_path, default_log_file, CONFIG_DIR_NAME, CONFIG_FILE_NAME,
    DEFAULT_LOG_FILE_NAME,
};
pub use file::ConfigFileError;
pub use settings::{ConfigFile, LoggingSettings, OutputSettings};
