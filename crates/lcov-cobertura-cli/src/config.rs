//! CLI configuration

use std::path::PathBuf;

use crate::commands::Cli;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - warnings and errors
    #[default]
    Normal,
    /// Verbose - progress messages
    Verbose,
    /// Debug - parser decisions
    Debug,
    /// Trace - every ignored record
    Trace,
}

impl Verbosity {
    /// Map `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// `tracing` filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Resolved settings for one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Tracefile to read
    pub input: PathBuf,
    /// Base directory for `SF` paths and the `<source>` element
    pub base_dir: String,
    /// Package exclusion patterns
    pub excludes: Vec<String>,
    /// Report destination, stdout when `None`
    pub output: Option<PathBuf>,
    /// Logging level
    pub verbosity: Verbosity,
}

impl From<Cli> for CliConfig {
    fn from(cli: Cli) -> Self {
        Self {
            verbosity: Verbosity::from_flags(cli.quiet, cli.verbose),
            input: cli.file,
            base_dir: cli.base_dir,
            excludes: cli.excludes,
            output: cli.output,
        }
    }
}
