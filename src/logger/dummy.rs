//! Discards everything. Returned for `off` levels and the `dummy` backend.

use super::Logger;
use crate::level::Level;
use crate::output::Destination;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, PoisonError};

/// Accepts every call and writes nothing. Level and output are remembered so
/// callers that read them back see what they set.
#[derive(Debug)]
pub struct DummyLogger {
    level: AtomicU8,
    output: Mutex<Destination>,
}

impl Default for DummyLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl DummyLogger {
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(Destination::stderr())
    }

    fn with_output(output: Destination) -> Self {
        Self {
            level: AtomicU8::new(Level::Off as u8),
            output: Mutex::new(output),
        }
    }
}

impl Logger for DummyLogger {
    fn backend_name(&self) -> &'static str {
        "dummy"
    }

    fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    fn output(&self) -> Destination {
        self.output
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_output(&self, output: Destination) {
        *self.output.lock().unwrap_or_else(PoisonError::into_inner) = output;
    }

    fn is_enabled(&self, _level: Level) -> bool {
        false
    }

    fn log(&self, _level: Level, _args: fmt::Arguments<'_>) {}

    fn print_fmt(&self, _args: fmt::Arguments<'_>) {}

    fn add_skip(&self, _skip: usize) -> Box<dyn Logger> {
        let derived = Self::with_output(self.output());
        derived.set_level(self.level());
        Box::new(derived)
    }
}
