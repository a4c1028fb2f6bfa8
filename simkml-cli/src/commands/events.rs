//! Events command - print the tracker output as JSON lines.

use std::io::{self, Write};
use std::path::Path;

use simkml::convert::track_file;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Run the events command.
pub fn run(input: &Path, verbose: bool) -> Result<(), CliError> {
    let runner = CliRunner::new(verbose)?;
    runner.log_startup("events");

    let (_, flight) = track_file(input, runner.config())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for event in flight.events() {
        serde_json::to_writer(&mut out, event).map_err(CliError::Serialize)?;
        writeln!(out).map_err(CliError::Output)?;
    }
    out.flush().map_err(CliError::Output)
}
