//! Configuration for grid building.
//!
//! - [`GridConfig`]: builder-style settings consumed by
//!   [`GridBuilder`](crate::grid::GridBuilder)
//! - [`ConfigFile`]: user settings persisted in `~/.polygrid/config.ini`
//!
//! # Example
//!
//! ```
//! use polygrid::config::{ConfigFile, GridConfig};
//!
//! let config = GridConfig::new(500.0).with_parallel(true);
//! assert_eq!(config.step_meters(), 500.0);
//!
//! let file = ConfigFile::default();
//! assert_eq!(file.grid_config(), GridConfig::default());
//! ```

mod file;
mod grid;
mod parser;
mod writer;

pub use file::{
    config_directory, config_file_path, ConfigFile, ConfigFileError, GridSettings,
    LoggingSettings,
};
pub use grid::{GridConfig, DEFAULT_PARALLEL, DEFAULT_STEP_METERS};
