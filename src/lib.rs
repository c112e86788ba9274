//! `logfacade` - one logger interface over several backends, selected by name.
//!
//! - A [`LoggerConfig`] names a backend, a level, and a console or file target
//! - [`LogContext::new_logger`] picks the backend and never fails: bad
//!   settings degrade to console output at a sane level
//! - Every backend implements the [`Logger`] facade
//! - A process-wide [`TraceFlag`] gates trace records and notifies subscribers
//!
//! # Example
//!
//! ```
//! use logfacade::{LogContext, Logger, LoggerConfig};
//!
//! let ctx = LogContext::new();
//! let config = LoggerConfig {
//!     backend: "logrus".to_string(),
//!     level: "debug".to_string(),
//!     ..LoggerConfig::default()
//! };
//!
//! let logger = ctx.new_logger(&config);
//! logger.info("service started");
//! logger.debug_fmt(format_args!("listening on port {}", 8080));
//!
//! // Trace records stay silent until trace mode starts.
//! ctx.trace_flag().start();
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `logfacade` command-line tool

pub mod build_info;
pub mod capture;
pub mod config;
pub mod context;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod trace;

#[cfg(feature = "cli")]
pub mod cli;

pub use capture::{CaptureGuard, capture};
pub use config::LoggerConfig;
pub use context::LogContext;
pub use error::Error;
pub use fmt::Format;
pub use level::Level;
pub use logger::{
    BackendBuilder, BackendRegistry, Builtin, DummyLogger, EntryLogger, Logger, StdLogger,
    StructuredLogger,
};
pub use output::{Destination, DestinationKind, MemoryBuffer};
pub use trace::TraceFlag;

/// Builds a logger through the process-wide context.
#[must_use]
pub fn new_logger(config: &LoggerConfig) -> Box<dyn Logger> {
    LogContext::global().new_logger(config)
}

/// Registers a backend constructor in the process-wide context.
pub fn register_builder<F>(name: impl Into<String>, builder: F)
where
    F: Fn(&LoggerConfig, &std::sync::Arc<TraceFlag>) -> Box<dyn Logger> + Send + Sync + 'static,
{
    LogContext::global().register_builder(name, builder);
}
