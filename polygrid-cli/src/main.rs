//! Polygrid CLI - Command-line interface
//!
//! This binary exposes the polygrid library: polygon extents, grid tiling
//! and great-circle line sampling over GeoJSON input.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};
use commands::config::ConfigCommands;
use commands::extent::ExtentArgs;
use commands::grid::GridArgs;
use commands::sample::SampleArgs;
use error::CliError;
use polygrid::config::config_file_path;
use runner::CliRunner;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "polygrid")]
#[command(version = polygrid::VERSION)]
#[command(about = "Geodesic extents and grid tiling for GeoJSON polygons", long_about = None)]
struct Cli {
    /// Config file to use (default: ~/.polygrid/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the [w, s, e, n] extent of each polygon feature
    Extent(ExtentArgs),

    /// Tile each polygon feature into a grid of cells
    Grid(GridArgs),

    /// Sample points along a great-circle line
    Sample(SampleArgs),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.unwrap_or_else(config_file_path);

    // Config management must work even when the current file is invalid.
    let command = match cli.command {
        Commands::Config(command) => return commands::config::run(command, &config_path),
        other => other,
    };

    let runner = CliRunner::new(&config_path, cli.verbose)?;

    match command {
        Commands::Extent(args) => commands::extent::run(args, &runner),
        Commands::Grid(args) => commands::grid::run(args, &runner),
        Commands::Sample(args) => commands::sample::run(args, &runner),
        Commands::Config(_) => Ok(()),
    }
}
