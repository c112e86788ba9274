//! The uniform logger interface and its backend adapters.
//!
//! Callers hold a `Box<dyn Logger>` from [`LogContext::new_logger`](crate::LogContext::new_logger)
//! and never see which backend sits behind it.

mod dummy;
mod registry;
mod shared;
mod standard;
mod structured;

pub use dummy::DummyLogger;
pub use registry::{BackendBuilder, BackendRegistry, Builtin, normalize_name};
pub use standard::StdLogger;
pub use structured::{EntryLogger, StructuredLogger};

use crate::level::Level;
use crate::output::Destination;
use std::fmt;

/// Capability set every backend adapter provides: level get/set, output
/// get/set, and leveled logging.
///
/// Trace records are additionally gated by the trace flag the adapter was
/// built with, so they stay silent until trace mode starts even when the
/// threshold is `trace`.
pub trait Logger: Send + Sync {
    /// Built-in backend family, for diagnostics.
    fn backend_name(&self) -> &'static str;

    fn level(&self) -> Level;

    fn set_level(&self, level: Level);

    /// Handle onto the current destination.
    fn output(&self) -> Destination;

    fn set_output(&self, output: Destination);

    /// Whether a record at `level` would be written right now.
    fn is_enabled(&self, level: Level) -> bool;

    /// Core dispatch for leveled records.
    fn log(&self, level: Level, args: fmt::Arguments<'_>);

    /// Writes regardless of level.
    fn print_fmt(&self, args: fmt::Arguments<'_>);

    /// Derives a logger annotated with `skip` more stack frames to skip when
    /// reporting the caller. The receiver is left untouched.
    fn add_skip(&self, skip: usize) -> Box<dyn Logger>;

    /// Buffered destinations may lose tail data on abrupt exit without this.
    fn flush(&self) {
        let _ = self.output().flush();
    }

    fn trace(&self, msg: &str) {
        self.log(Level::Trace, format_args!("{msg}"));
    }

    fn trace_fmt(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Trace, args);
    }

    fn debug(&self, msg: &str) {
        self.log(Level::Debug, format_args!("{msg}"));
    }

    fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    fn info(&self, msg: &str) {
        self.log(Level::Info, format_args!("{msg}"));
    }

    fn info_fmt(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    fn warn(&self, msg: &str) {
        self.log(Level::Warn, format_args!("{msg}"));
    }

    fn warn_fmt(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    fn error(&self, msg: &str) {
        self.log(Level::Error, format_args!("{msg}"));
    }

    fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    /// Logs, flushes, and exits the process with status 1. The exit happens
    /// even when the level filters the record out.
    fn fatal(&self, msg: &str) -> ! {
        self.fatal_fmt(format_args!("{msg}"))
    }

    fn fatal_fmt(&self, args: fmt::Arguments<'_>) -> ! {
        self.log(Level::Fatal, args);
        self.flush();
        std::process::exit(1)
    }

    /// Logs and then panics with the message, but only when panic-level
    /// records are enabled.
    fn panic(&self, msg: &str) {
        self.panic_fmt(format_args!("{msg}"));
    }

    fn panic_fmt(&self, args: fmt::Arguments<'_>) {
        if !self.is_enabled(Level::Panic) {
            return;
        }
        let msg = args.to_string();
        self.log(Level::Panic, format_args!("{msg}"));
        self.flush();
        panic!("{msg}");
    }

    fn print(&self, msg: &str) {
        self.print_fmt(format_args!("{msg}"));
    }

    /// Like [`print`](Self::print), for messages that may already end in a
    /// newline: trailing line breaks are dropped so the record stays one line.
    fn println(&self, msg: &str) {
        self.print_fmt(format_args!("{}", msg.trim_end_matches(['\n', '\r'])));
    }

    fn println_fmt(&self, args: fmt::Arguments<'_>) {
        self.println(&args.to_string());
    }
}
