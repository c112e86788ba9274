//! Structured backend: a root logger bound to the whole instance, and
//! entries bound to a derived context of key/value fields.
//!
//! Roots and entries share one core, so a level or output change made through
//! any of them is seen by all. Deriving never mutates the source.

use super::Logger;
use super::shared::Core;
use crate::config::LoggerConfig;
use crate::fmt::{Fields, Format};
use crate::level::Level;
use crate::output::Destination;
use crate::trace::TraceFlag;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Field key that records accumulated caller skip depth.
pub const SKIP_FIELD: &str = "skip";

/// Root structured logger.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    core: Arc<Core>,
}

impl StructuredLogger {
    /// Configures the backend from `config`, using `default_format` unless
    /// the config names another one.
    #[must_use]
    pub fn from_config(
        name: &'static str,
        config: &LoggerConfig,
        default_format: Format,
        trace: &Arc<TraceFlag>,
    ) -> Self {
        Self {
            core: Core::from_config(name, config, default_format, trace),
        }
    }

    /// Builds directly onto a destination, bypassing config handling.
    #[must_use]
    pub fn new(
        name: &'static str,
        level: Level,
        output: Destination,
        format: Format,
        trace: Arc<TraceFlag>,
    ) -> Self {
        Self {
            core: Core::new(name, level, output, format, trace),
        }
    }

    /// Derives an entry carrying one field.
    #[must_use]
    pub fn with_field(&self, key: impl Into<String>, value: impl Into<Value>) -> EntryLogger {
        self.entry().with_field(key, value)
    }

    /// Derives an entry carrying all of `fields`.
    #[must_use]
    pub fn with_fields<K, V>(&self, fields: impl IntoIterator<Item = (K, V)>) -> EntryLogger
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.entry().with_fields(fields)
    }

    fn entry(&self) -> EntryLogger {
        EntryLogger {
            core: Arc::clone(&self.core),
            fields: Vec::new(),
        }
    }
}

impl Logger for StructuredLogger {
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
        self.core.emit(level, &[], args);
    }

    fn print_fmt(&self, args: fmt::Arguments<'_>) {
        self.core.emit_print(&[], args);
    }

    fn add_skip(&self, skip: usize) -> Box<dyn Logger> {
        Box::new(self.entry().with_skip(skip))
    }
}

/// Logger bound to a derived context of fields.
#[derive(Debug, Clone)]
pub struct EntryLogger {
    core: Arc<Core>,
    fields: Fields,
}

impl EntryLogger {
    /// Derives a new entry; an existing key is overwritten in place.
    #[must_use]
    pub fn with_field(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut derived = self.clone();
        derived.set_field(key.into(), value.into());
        derived
    }

    #[must_use]
    pub fn with_fields<K, V>(&self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let mut derived = self.clone();
        for (key, value) in fields {
            derived.set_field(key.into(), value.into());
        }
        derived
    }

    #[must_use]
    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    /// Accumulated frames to skip when reporting the caller.
    #[must_use]
    pub fn skip(&self) -> usize {
        self.fields
            .iter()
            .find(|(key, _)| key == SKIP_FIELD)
            .and_then(|(_, value)| value.as_u64())
            .and_then(|skip| usize::try_from(skip).ok())
            .unwrap_or(0)
    }

    fn with_skip(&self, skip: usize) -> Self {
        self.with_field(SKIP_FIELD, self.skip() + skip)
    }

    fn set_field(&mut self, key: String, value: Value) {
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.fields.push((key, value));
        }
    }
}

impl Logger for EntryLogger {
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
        self.core.emit(level, &self.fields, args);
    }

    fn print_fmt(&self, args: fmt::Arguments<'_>) {
        self.core.emit_print(&self.fields, args);
    }

    fn add_skip(&self, skip: usize) -> Box<dyn Logger> {
        Box::new(self.with_skip(skip))
    }
}
