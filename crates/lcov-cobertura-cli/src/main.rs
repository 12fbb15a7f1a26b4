//! lcov_cobertura: Converts LCOV output to Cobertura-compatible XML
//!
//! ## Usage
//!
//! ```bash
//! lcov_cobertura lcov.info                          # Print XML to stdout
//! lcov_cobertura lcov.info -o coverage.xml          # Write XML to a file
//! lcov_cobertura lcov.info -b src -e '^test,vendor' # Base dir and excludes
//! ```

use clap::Parser;
use lcov_cobertura_cli::{logging, runner, Cli, CliConfig, CliResult};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let config = CliConfig::from(Cli::parse());
    logging::init_tracing(config.verbosity);
    runner::run(&config)
}
