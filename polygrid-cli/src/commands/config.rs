//! Configuration management CLI commands.
//!
//! Provides `config path` and `config init` for locating and creating the
//! configuration file.

use clap::Subcommand;
use polygrid::config::ConfigFile;
use std::path::Path;

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Create the configuration file with default settings
    Init {
        /// Overwrite an existing file with defaults
        #[arg(long)]
        force: bool,
    },
}

/// Run a config subcommand against the given config file.
pub fn run(command: ConfigCommands, config_path: &Path) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => run_path(config_path),
        ConfigCommands::Init { force } => run_init(config_path, force),
    }
}

/// Show the configuration file path.
fn run_path(config_path: &Path) -> Result<(), CliError> {
    println!("{}", config_path.display());
    Ok(())
}

/// Create the configuration file.
fn run_init(config_path: &Path, force: bool) -> Result<(), CliError> {
    if force {
        ConfigFile::default().save_to(config_path)?;
        println!("Wrote default configuration: {}", config_path.display());
        return Ok(());
    }

    if ConfigFile::ensure_exists(config_path)? {
        println!("Created configuration: {}", config_path.display());
    } else {
        println!("Configuration already exists: {}", config_path.display());
        println!("Use --force to overwrite it with defaults.");
    }
    Ok(())
}
