//! CLI logic for the Stratus diagram tool.
//!
//! The binary renders the reference campus topology declared in
//! [`topology`]. The topology's own layout settings are the base; a
//! configuration file, when one is found, overrides them value by value,
//! and command-line flags override both.

pub mod error_adapter;
pub mod topology;

mod args;
mod config;

pub use args::Args;

use std::path::PathBuf;

use log::{debug, info};

use stratus::{
    DiagramRenderer, StratusError,
    config::{AppConfig, Direction, Format},
};

use config::ConfigError;

/// Run the Stratus CLI application
///
/// Declares the reference topology, renders it and writes the artifact
/// into the output directory.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `StratusError` for:
/// - Configuration loading errors or invalid override flags
/// - Dangling edges in the topology
/// - Rendering errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<PathBuf, StratusError> {
    info!(output_dir = args.output_dir; "Rendering reference topology");

    let config = load_effective_config(args)?;

    let diagram = topology::campus_network()?;
    debug!(
        nodes = diagram.nodes().count(),
        groups = diagram.groups().count(),
        edges = diagram.edges().len();
        "Topology declared"
    );

    let renderer = DiagramRenderer::new(config);
    let path = renderer.render_to_file(&diagram, &args.output_dir)?;

    info!(output_file = path.display().to_string(); "Diagram written");

    Ok(path)
}

/// Layer the configuration file over the topology layout, then apply
/// command-line overrides.
fn load_effective_config(args: &Args) -> Result<AppConfig, StratusError> {
    let mut config = config::load_config(args.config.as_ref(), &topology::default_config())?;

    if let Some(format) = &args.format {
        let format: Format = format.parse().map_err(|message| ConfigError::InvalidFlag {
            flag: "format",
            message,
        })?;
        config.output_mut().set_format(format);
    }

    if let Some(direction) = &args.direction {
        let direction: Direction =
            direction
                .parse()
                .map_err(|message| ConfigError::InvalidFlag {
                    flag: "direction",
                    message,
                })?;
        config.graph_mut().set_direction(direction);
    }

    if args.show {
        config.output_mut().set_show(true);
    }

    debug!(
        format:% = config.output().format(),
        direction:% = config.graph().direction(),
        show = config.output().show();
        "Effective configuration"
    );

    Ok(config)
}
