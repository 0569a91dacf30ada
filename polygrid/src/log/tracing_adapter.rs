//! Tracing library adapter implementation.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// Logger implementation that delegates to the `tracing` crate.
///
/// Messages are emitted under the `polygrid` target, so they can be
/// filtered with `RUST_LOG=polygrid=debug`. Output depends on the installed
/// subscriber, see [`crate::logging::init_logging`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        match level {
            LogLevel::Trace => tracing::trace!(target: "polygrid", "{}", args),
            LogLevel::Debug => tracing::debug!(target: "polygrid", "{}", args),
            LogLevel::Info => tracing::info!(target: "polygrid", "{}", args),
            LogLevel::Warn => tracing::warn!(target: "polygrid", "{}", args),
            LogLevel::Error => tracing::error!(target: "polygrid", "{}", args),
        }
    }
}
