//! Explicit home for the trace flag and backend registry.
//!
//! Tests build isolated contexts with [`LogContext::new`]; everything else
//! shares [`LogContext::global`], which the crate-level free functions use.

use crate::config::LoggerConfig;
use crate::internal;
use crate::level::Level;
use crate::logger::{BackendBuilder, BackendRegistry, Builtin, DummyLogger, Logger};
use crate::trace::TraceFlag;
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<LogContext> = OnceLock::new();

/// Trace flag plus backend registry.
#[derive(Debug, Default)]
pub struct LogContext {
    trace: Arc<TraceFlag>,
    registry: BackendRegistry,
}

impl LogContext {
    /// Fresh context: trace mode off, nothing registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide context, created on first use.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::new)
    }

    /// Shared with every logger this context builds.
    #[must_use]
    pub const fn trace_flag(&self) -> &Arc<TraceFlag> {
        &self.trace
    }

    #[must_use]
    pub const fn registry(&self) -> &BackendRegistry {
        &self.registry
    }

    /// Registers (or replaces) the constructor used for `name`.
    pub fn register_builder<F>(&self, name: impl Into<String>, builder: F)
    where
        F: Fn(&LoggerConfig, &Arc<TraceFlag>) -> Box<dyn Logger> + Send + Sync + 'static,
    {
        self.registry.register_builder(name, builder);
    }

    /// Builds a logger for `config`. Never fails.
    ///
    /// An `off` level short-circuits to a [`DummyLogger`] before any lookup.
    /// Otherwise a registered constructor wins, then the built-in table; an
    /// unknown name gets the default backend and an internal warning.
    #[must_use]
    pub fn new_logger(&self, config: &LoggerConfig) -> Box<dyn Logger> {
        if Level::parse_or_default(&config.level) == Level::Off {
            internal::debug("LOGGER", "Level is off, using dummy logger");
            return Box::new(DummyLogger::new());
        }

        if let Some(builder) = self.registry.get(&config.backend) {
            internal::debug(
                "LOGGER",
                &format!("Using registered backend '{}'", config.backend),
            );
            return builder(config, &self.trace);
        }

        let builtin = Builtin::from_name(&config.backend).unwrap_or_else(|| {
            internal::warn(
                "LOGGER",
                &format!(
                    "Unknown backend '{}', using {}",
                    config.backend,
                    Builtin::DEFAULT.as_str()
                ),
            );
            Builtin::DEFAULT
        });
        builtin.build(config, &self.trace)
    }

    /// Looks up the registered constructor for `name`, if any.
    #[must_use]
    pub fn builder(&self, name: &str) -> Option<BackendBuilder> {
        self.registry.get(name)
    }
}
