//! simkml CLI - Command-line interface
//!
//! Converts X-Plane 11 and FlightGear flight logs into KML tracks for
//! Google Earth.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::convert::ConvertArgs;

#[derive(Parser)]
#[command(name = "simkml")]
#[command(version, about = "Convert flight simulator logs to KML", long_about = None)]
struct Cli {
    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a flight log (.txt X-Plane 11, .csv FlightGear) to KML
    Convert {
        /// Flight log to convert
        input: PathBuf,

        /// Output file (default: "<Flightlog date time>.kml")
        output: Option<PathBuf>,
    },

    /// Print the detected tracks and events as JSON lines
    Events {
        /// Flight log to analyze
        input: PathBuf,
    },

    /// Create the default configuration file
    Init,

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version are not errors
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    let result = match cli.command {
        Commands::Convert { input, output } => commands::convert::run(ConvertArgs {
            input,
            output,
            verbose: cli.verbose,
        }),
        Commands::Events { input } => commands::events::run(&input, cli.verbose),
        Commands::Init => commands::init::run(),
        Commands::Config(command) => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}
