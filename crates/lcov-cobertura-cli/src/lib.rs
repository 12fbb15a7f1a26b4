//! lcov_cobertura CLI library
//!
//! Argument parsing, configuration, logging and file handling around the
//! `lcov-cobertura` converter.

#![warn(missing_docs)]

mod commands;
mod config;
mod error;
pub mod logging;
pub mod runner;

pub use commands::Cli;
pub use config::{CliConfig, Verbosity};
pub use error::{CliError, CliResult};
