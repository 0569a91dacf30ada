//! Logging infrastructure for polygrid binaries.
//!
//! Installs a global `tracing` subscriber with:
//! - a console layer on stderr (stdout is left free for GeoJSON output)
//! - an optional non-blocking file layer
//! - an `RUST_LOG` env filter, defaulting to `info` (`debug` when verbose)

use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard flushes and closes the log file writer, if any.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize logging.
///
/// # Arguments
///
/// * `log_file` - Optional log file; its directory is created and the file
///   is cleared at startup
/// * `verbose` - Use `debug` instead of `info` when `RUST_LOG` is not set
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or the log file
/// cannot be cleared.
pub fn init_logging(log_file: Option<&Path>, verbose: bool) -> Result<LoggingGuard, io::Error> {
    let default_level = if verbose { "debug" } else { default_log_level() };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, file_guard) = match log_file {
        Some(path) => {
            let (dir, name) = split_log_path(path)?;
            fs::create_dir_all(dir)?;
            fs::write(path, "")?;

            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Default log level when `RUST_LOG` is not set.
pub fn default_log_level() -> &'static str {
    "info"
}

/// Split a log path into its directory and file name.
fn split_log_path(path: &Path) -> Result<(&Path, &std::ffi::OsStr), io::Error> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("log path has no file name: {}", path.display()),
        )
    })?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok((dir, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn test_split_log_path_with_directory() {
        let (dir, name) = split_log_path(Path::new("/var/log/polygrid.log")).unwrap();
        assert_eq!(dir, Path::new("/var/log"));
        assert_eq!(name, "polygrid.log");
    }

    #[test]
    fn test_split_log_path_bare_file_uses_cwd() {
        let (dir, name) = split_log_path(Path::new("polygrid.log")).unwrap();
        assert_eq!(dir, Path::new("."));
        assert_eq!(name, "polygrid.log");
    }

    #[test]
    fn test_split_log_path_rejects_directory_only() {
        assert!(split_log_path(Path::new("/")).is_err());
    }

    #[test]
    fn test_guard_structure() {
        use tracing_appender::non_blocking::NonBlocking;

        let (non_blocking, guard) = NonBlocking::new(std::io::sink());
        drop(non_blocking);

        let _logging_guard = LoggingGuard {
            _file_guard: Some(guard),
        };
    }

    // init_logging installs a global subscriber, which can only happen once
    // per process; it is exercised by the CLI integration tests instead.
}
