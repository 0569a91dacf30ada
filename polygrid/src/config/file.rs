//! Configuration file handling for ~/.polygrid/config.ini.
//!
//! Loads and saves user configuration with sensible defaults. Parsing lives in
//! [`super::parser`], serialization in [`super::writer`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::grid::{GridConfig, DEFAULT_PARALLEL, DEFAULT_STEP_METERS};

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    /// Grid settings
    pub grid: GridSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// `[grid]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSettings {
    /// Cell edge length in meters
    pub step_meters: f64,
    /// Classify cells in parallel
    pub parallel: bool,
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoggingSettings {
    /// Optional log file; console-only logging when unset
    pub file: Option<PathBuf>,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            step_meters: DEFAULT_STEP_METERS,
            parallel: DEFAULT_PARALLEL,
        }
    }
}

impl ConfigFile {
    /// Load configuration from the default path (~/.polygrid/config.ini).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Create the config file with defaults if it doesn't exist.
    ///
    /// Returns `true` when a new file was written.
    pub fn ensure_exists(path: &Path) -> Result<bool, ConfigFileError> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    /// Grid configuration described by the `[grid]` section.
    pub fn grid_config(&self) -> GridConfig {
        GridConfig::new(self.grid.step_meters).with_parallel(self.grid.parallel)
    }
}

/// Get the path to the config directory (~/.polygrid).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".polygrid")
}

/// Get the path to the config file (~/.polygrid/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}
