//! Minimal `date time [LEVEL] message` logger without structured fields.

use super::Logger;
use super::shared::Core;
use super::structured::SKIP_FIELD;
use crate::config::LoggerConfig;
use crate::fmt::Format;
use crate::level::Level;
use crate::output::Destination;
use crate::trace::TraceFlag;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Plain-line backend. Derived loggers share level and output with their
/// source and only differ in the recorded skip depth.
#[derive(Debug, Clone)]
pub struct StdLogger {
    core: Arc<Core>,
    skip: usize,
}

impl StdLogger {
    /// Configures the backend from `config`; see [`crate::LogContext::new_logger`]
    /// for the fallback rules.
    #[must_use]
    pub fn from_config(config: &LoggerConfig, trace: &Arc<TraceFlag>) -> Self {
        Self {
            core: Core::from_config("std", config, Format::Plain, trace),
            skip: 0,
        }
    }

    /// Builds directly onto a destination, bypassing config handling.
    #[must_use]
    pub fn new(level: Level, output: Destination, trace: Arc<TraceFlag>) -> Self {
        Self {
            core: Core::new("std", level, output, Format::Plain, trace),
            skip: 0,
        }
    }

    /// Accumulated frames to skip when reporting the caller.
    #[must_use]
    pub const fn skip(&self) -> usize {
        self.skip
    }

    /// Trailing `skip=N` annotation, only once a skip was added.
    fn fields(&self) -> Vec<(String, Value)> {
        if self.skip == 0 {
            Vec::new()
        } else {
            vec![(SKIP_FIELD.to_string(), Value::from(self.skip))]
        }
    }
}

impl Logger for StdLogger {
    fn backend_name(&self) -> &'static str {
        self.core.name()
    }

    fn level(&self) -> Level {
        self.core.level()
    }

    fn set_level(&self, level: Level) {
        self.core.set_level(level);
    }

    fn output(&self) -> Destination {
        self.core.output()
    }

    fn set_output(&self, output: Destination) {
        self.core.set_output(output);
    }

    fn is_enabled(&self, level: Level) -> bool {
        self.core.is_enabled(level)
    }

    fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        self.core.emit(level, &self.fields(), args);
    }

    fn print_fmt(&self, args: fmt::Arguments<'_>) {
        self.core.emit_print(&self.fields(), args);
    }

    fn add_skip(&self, skip: usize) -> Box<dyn Logger> {
        Box::new(Self {
            core: Arc::clone(&self.core),
            skip: self.skip + skip,
        })
    }
}
