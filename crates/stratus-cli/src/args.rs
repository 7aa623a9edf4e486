//! Command-line argument definitions for the Stratus CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control where the diagram is written, its
//! format and layout direction, configuration file selection, and logging
//! verbosity.

use clap::Parser;

/// Render the reference cloud architecture diagram
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory the rendered diagram is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Output format (png, svg, pdf, jpg, dot); overrides the config file
    #[arg(short, long)]
    pub format: Option<String>,

    /// Layout direction (TB, BT, LR, RL); overrides the config file
    #[arg(short, long)]
    pub direction: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Open the diagram in the system viewer once written
    #[arg(long)]
    pub show: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
