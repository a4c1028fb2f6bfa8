//! Convert command - turn a flight log into a KML file.

use std::path::PathBuf;

use simkml::convert::Conversion;
use simkml::source::SimulatorKind;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the convert command.
pub struct ConvertArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub verbose: bool,
}

/// Run the convert command.
pub fn run(args: ConvertArgs) -> Result<(), CliError> {
    // Fail on an unknown extension before touching config or logs
    let kind = SimulatorKind::from_path(&args.input).map_err(|e| CliError::Convert(e.into()))?;

    let runner = CliRunner::new(args.verbose)?;
    runner.log_startup("convert");

    println!("{} data detected.", kind);

    let conversion = Conversion::prepare(&args.input, runner.config())?;
    let flight = conversion.flight();
    println!(
        "{} rows, {} tracks, {} placemarks",
        flight.rows(),
        flight.segment_count(),
        flight.marker_count()
    );

    let output = match args.output {
        Some(path) => path,
        None => conversion.default_output(runner.config())?,
    };
    println!("Saving {}", output.display());
    conversion.save(&output)?;

    Ok(())
}
