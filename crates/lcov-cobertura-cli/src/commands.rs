//! CLI command definitions using clap

use clap::Parser;
use std::path::PathBuf;

use lcov_cobertura::DEFAULT_BASE_DIR;

/// lcov_cobertura: Converts LCOV output to Cobertura-compatible XML
#[derive(Parser, Debug)]
#[command(name = "lcov_cobertura")]
#[command(version, about = "Converts LCOV output to Cobertura-compatible XML", long_about = None)]
pub struct Cli {
    /// LCOV tracefile to convert
    pub file: PathBuf,

    /// Directory where source files are located
    #[arg(short, long, default_value = DEFAULT_BASE_DIR)]
    pub base_dir: String,

    /// Comma-separated list of regexes of packages to exclude
    #[arg(short, long, value_delimiter = ',')]
    pub excludes: Vec<String>,

    /// Path to store Cobertura XML file (prints to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
