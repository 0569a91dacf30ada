//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;
use polygrid::config::ConfigFileError;
use polygrid::GridError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to read an input file
    InputRead { path: String, error: std::io::Error },
    /// Input is not a GeoJSON Feature or FeatureCollection
    Parse { path: String, reason: String },
    /// Extent or grid computation failed
    Grid(GridError),
    /// Failed to encode output as JSON
    Encode(serde_json::Error),
    /// Failed to write output file
    FileWrite { path: String, error: std::io::Error },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::Config(_) = self {
            eprintln!();
            eprintln!("Check the config file shown by: polygrid config path");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::InputRead { path, error } => {
                write!(f, "Failed to read input '{}': {}", path, error)
            }
            CliError::Parse { path, reason } => {
                write!(f, "Invalid GeoJSON in '{}': {}", path, reason)
            }
            CliError::Grid(e) => write!(f, "Grid computation failed: {}", e),
            CliError::Encode(e) => write!(f, "Failed to encode output: {}", e),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::InputRead { error, .. } => Some(error),
            CliError::Grid(e) => Some(e),
            CliError::Encode(e) => Some(e),
            CliError::FileWrite { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<GridError> for CliError {
    fn from(e: GridError) -> Self {
        CliError::Grid(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Encode(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_grid_error_display() {
        let err = CliError::from(GridError::unsupported("MultiPolygon"));
        assert_eq!(
            err.to_string(),
            "Grid computation failed: unsupported geometry type MultiPolygon"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_config_error_from_config_file_error() {
        let err = CliError::from(ConfigFileError::WriteError("disk full".to_string()));
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_file_write_display() {
        let err = CliError::FileWrite {
            path: "/tmp/out.json".to_string(),
            error: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to write file '/tmp/out.json': denied");
    }
}
