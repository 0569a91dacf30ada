//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization, builder creation and
//! output writing to reduce duplication across command handlers.

use crate::error::CliError;
use polygrid::config::{ConfigFile, GridConfig};
use polygrid::grid::GridBuilder;
use polygrid::log::TracingLogger;
use polygrid::logging::{init_logging, LoggingGuard};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Config file to load; defaults apply when it is missing
    /// * `verbose` - When true, enables debug-level logging unless `RUST_LOG` is set
    pub fn new(config_path: &Path, verbose: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load_from(config_path)?;

        let logging_guard = init_logging(config.logging.file.as_deref(), verbose)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("Polygrid v{}", polygrid::VERSION);
        info!("Polygrid CLI: {} command", command);
    }

    /// Create a grid builder that logs through `tracing`.
    ///
    /// Command-line values take precedence over the config file.
    pub fn create_builder(
        &self,
        step_meters: Option<f64>,
        parallel: Option<bool>,
    ) -> GridBuilder {
        let config = resolve_grid_config(self.config.grid_config(), step_meters, parallel);

        info!(
            "Grid step {} m, parallel classification {}",
            config.step_meters(),
            if config.parallel() { "on" } else { "off" }
        );

        GridBuilder::new(config).with_logger(Arc::new(TracingLogger))
    }

    /// Write command output to a file, or to stdout when no path is given.
    pub fn write_output(&self, path: Option<&Path>, content: &str) -> Result<(), CliError> {
        let Some(path) = path else {
            println!("{}", content);
            return Ok(());
        };

        std::fs::write(path, content).map_err(|e| CliError::FileWrite {
            path: path.display().to_string(),
            error: e,
        })?;

        info!("Output written: {} ({} bytes)", path.display(), content.len());
        Ok(())
    }
}

/// Overlay command-line grid options on the configured defaults.
fn resolve_grid_config(
    defaults: GridConfig,
    step_meters: Option<f64>,
    parallel: Option<bool>,
) -> GridConfig {
    GridConfig::new(step_meters.unwrap_or(defaults.step_meters()))
        .with_parallel(parallel.unwrap_or(defaults.parallel()))
}
