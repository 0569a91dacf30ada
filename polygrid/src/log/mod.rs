//! Logging abstraction layer.
//!
//! Grid building reports its progress through the [`Logger`] trait rather than
//! calling `tracing` directly, so library callers choose where messages go.
//!
//! - `Logger` trait: the interface components log through
//! - `TracingLogger`: adapter that delegates to the `tracing` crate
//! - `NoOpLogger`: silent logger, the default for [`GridBuilder`]
//!
//! [`GridBuilder`]: crate::grid::GridBuilder
//!
//! # Usage
//!
//! ```
//! use polygrid::config::GridConfig;
//! use polygrid::grid::GridBuilder;
//! use polygrid::log::{Logger, TracingLogger};
//! use std::sync::Arc;
//!
//! let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
//! let builder = GridBuilder::new(GridConfig::default()).with_logger(logger);
//! ```

mod noop;
mod tracing_adapter;
mod r#trait;

pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use tracing_adapter::TracingLogger;
