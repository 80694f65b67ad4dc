//! CLI arguments using clap

use crate::application::dto::{DEFAULT_FORMAT, DetectOptions};
use clap::Parser;
use std::path::PathBuf;

/// magic-detect - File header checker
///
/// Reports which of the given files start with the magic number of the
/// requested format.
#[derive(Parser, Debug)]
#[command(name = "magic-detect")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check which files have a valid header for a format", long_about = None)]
pub struct Cli {
    /// File format to detect (png, jpg, gif, pdf)
    #[arg(short, long, default_value = DEFAULT_FORMAT)]
    pub format: String,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// List supported formats and their signatures, then exit
    #[arg(long)]
    pub list_formats: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,

    /// Files to check
    #[arg(value_name = "FILE")]
    pub paths: Vec<PathBuf>,
}

impl Cli {
    /// Converts the parsed arguments into detection options
    pub fn detect_options(&self) -> DetectOptions {
        DetectOptions::new(self.paths.clone()).with_format(self.format.clone())
    }

    /// Log filter directive implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }
}
