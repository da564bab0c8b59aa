//! Configuration management for gcode-details.
//!
//! Handles:
//! - Command-line argument parsing
//! - Validation of the single input path

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::classify::DescriptionStyle;

const USAGE: &str = "Syntax:  gcode-details GCodeFilePath\n\n";

/// Command-line arguments for gcode-details
#[derive(Debug, Parser)]
#[command(name = "gcode-details")]
#[command(about = "Show what every line of a G-code file starts with")]
#[command(version)]
pub struct Args {
    /// G-code file to describe (exactly one is expected)
    #[arg(value_name = "GCODE_FILE")]
    pub files: Vec<PathBuf>,

    /// Print the longer description of each leading character
    #[arg(long)]
    pub detailed: bool,

    /// Log level for diagnostics on stderr
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error, off)"
    )]
    pub log_level: String,
}

/// Resolved configuration for a single run
#[derive(Debug, Clone)]
pub struct Config {
    /// The toolpath file to read
    pub input: PathBuf,
    /// Short or detailed descriptions
    pub style: DescriptionStyle,
    /// Default log filter, overridden by `RUST_LOG`
    pub log_level: String,
}

impl Config {
    /// Create configuration from the process command line
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let mut files = args.files;
        if files.len() != 1 {
            bail!("expected exactly one G-code file, got {}", files.len());
        }

        let style = if args.detailed {
            DescriptionStyle::Detailed
        } else {
            DescriptionStyle::Short
        };

        Ok(Config {
            input: files.remove(0),
            style,
            log_level: args.log_level,
        })
    }
}

/// Syntax message shown when the argument count is wrong
pub fn usage() -> &'static str {
    USAGE
}
