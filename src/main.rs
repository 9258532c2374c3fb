//! Wayfind - shortest paths and minimum cuts from the command line
//!
//! A thin driver over `wayfind-core`: reads cost grids and edge lists,
//! runs the search or min-cut engines, and prints the result.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use wayfind_core::error::{ExitCode as WayfindExitCode, WayfindError};
use wayfind_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let Err(e) = commands::dispatch::run(&cli, start) else {
        return ExitCode::from(WayfindExitCode::Success as u8);
    };

    if cli.format == OutputFormat::Json {
        eprintln!("{}", e.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", e);
    }
    ExitCode::from(e.exit_code() as u8)
}

/// Clap failures, as a JSON envelope when `--format json` is on the command line.
///
/// `--format` is global, so parsing can fail before `Cli.format` exists.
fn report_parse_error(err: clap::Error) -> ExitCode {
    use clap::error::ErrorKind;

    if !argv_requests_json() {
        err.exit();
    }

    let error = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        // bad grid coordinates, algorithm names and --format values
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::UnknownArgument
        | ErrorKind::InvalidSubcommand
        | ErrorKind::MissingSubcommand
        | ErrorKind::MissingRequiredArgument => WayfindError::UsageError(err.to_string()),
        _ => WayfindError::Other(err.to_string()),
    };

    eprintln!("{}", error.to_json());
    ExitCode::from(error.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let args: Vec<String> = env::args().skip(1).collect();
    args.iter().any(|arg| arg == "--format=json")
        || args.windows(2).any(|pair| pair[0] == "--format" && pair[1] == "json")
}
