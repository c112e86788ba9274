//! State shared between a root logger and everything derived from it.

use crate::config::LoggerConfig;
use crate::fmt::{Format, Record};
use crate::internal;
use crate::level::Level;
use crate::output::{Destination, OutputError, open_log_file};
use crate::trace::TraceFlag;

use chrono::Local;
use serde_json::Value;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

pub(super) struct Core {
    name: &'static str,
    level: AtomicU8,
    output: Mutex<Destination>,
    format: Format,
    trace: Arc<TraceFlag>,
}

impl fmt::Debug for Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Core")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl Core {
    pub(super) fn new(
        name: &'static str,
        level: Level,
        output: Destination,
        format: Format,
        trace: Arc<TraceFlag>,
    ) -> Arc<Self> {
        Arc::new(Self {
            name,
            level: AtomicU8::new(level as u8),
            output: Mutex::new(output),
            format,
            trace,
        })
    }

    /// Backend initialization: forced level, format override, and file
    /// target with console fallback. Never fails.
    pub(super) fn from_config(
        name: &'static str,
        config: &LoggerConfig,
        default_format: Format,
        trace: &Arc<TraceFlag>,
    ) -> Arc<Self> {
        let level = config.effective_level();
        let format = select_format(config, default_format);
        let core = Self::new(
            name,
            level,
            Destination::stderr(),
            format,
            Arc::clone(trace),
        );
        internal::debug(
            "LOGGER",
            &format!("Backend {name}: level={level} format={format}"),
        );

        if config.wants_file() {
            match open_log_file(config) {
                Ok((destination, path)) => {
                    internal::debug("FILE", &format!("Logging to {}", path.display()));
                    core.set_output(destination);
                }
                Err(e @ OutputError::CreateDir { .. }) => {
                    internal::warn("FILE", &format!("{e}; logging to stderr"));
                }
                Err(e @ OutputError::OpenFile { .. }) => {
                    core.emit(Level::Warn, &[], format_args!("{e}; logging to stderr"));
                }
            }
        }

        core
    }

    pub(super) const fn name(&self) -> &'static str {
        self.name
    }

    pub(super) fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    pub(super) fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    pub(super) fn output(&self) -> Destination {
        self.output
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(super) fn set_output(&self, output: Destination) {
        *self.output.lock().unwrap_or_else(PoisonError::into_inner) = output;
    }

    pub(super) fn is_enabled(&self, level: Level) -> bool {
        self.level().enables(level) && (level != Level::Trace || self.trace.is_enabled())
    }

    pub(super) fn emit(&self, level: Level, fields: &[(String, Value)], args: fmt::Arguments<'_>) {
        if self.is_enabled(level) {
            self.write(Some(level), fields, args);
        }
    }

    pub(super) fn emit_print(&self, fields: &[(String, Value)], args: fmt::Arguments<'_>) {
        self.write(None, fields, args);
    }

    fn write(&self, level: Option<Level>, fields: &[(String, Value)], args: fmt::Arguments<'_>) {
        let owned;
        let message = if let Some(s) = args.as_str() {
            s
        } else {
            owned = args.to_string();
            owned.as_str()
        };

        let record = Record {
            level,
            message,
            fields,
            time: Local::now(),
        };
        let line = self.format.render(&record);
        // Logging must never take the host program down.
        let _ = self.output().write_line(&line);
    }
}

fn select_format(config: &LoggerConfig, default_format: Format) -> Format {
    if config.format.trim().is_empty() {
        return default_format;
    }
    Format::parse(&config.format).unwrap_or_else(|| {
        internal::warn(
            "LOGGER",
            &format!(
                "Unknown format '{}', using {default_format}",
                config.format
            ),
        );
        default_format
    })
}
