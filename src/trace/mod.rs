//! Process-wide trace switch.
//!
//! Trace-level records are suppressed unless the switch is on, regardless of the
//! configured level threshold. Other subsystems can subscribe to transitions.
//!
//! The enabled bit is flipped with compare-and-swap so concurrent `start`/`stop`
//! calls never fire handlers twice for one transition. Handlers run under a mutex
//! held only while they execute; `is_enabled` never blocks.

use crate::context::LogContext;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

/// Receives `(old, new)` on every actual transition.
pub type TraceHandler = Box<dyn Fn(bool, bool) + Send + Sync>;

/// Two-state switch with ordered change notification.
#[derive(Default)]
pub struct TraceFlag {
    enabled: AtomicBool,
    handlers: Mutex<Vec<TraceHandler>>,
}

impl std::fmt::Debug for TraceFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceFlag")
            .field("enabled", &self.is_enabled())
            .field("handlers", &self.handler_count())
            .finish()
    }
}

impl TraceFlag {
    /// Starts disabled with no handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns trace mode on. Returns `false` when it was already on.
    pub fn start(&self) -> bool {
        self.transition(false, true)
    }

    /// Turns trace mode off. Returns `false` when it was already off.
    pub fn stop(&self) -> bool {
        self.transition(true, false)
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Appends a handler; handlers fire in registration order.
    ///
    /// Handlers must not register further handlers from inside the callback,
    /// the handler list is locked while they run.
    pub fn register_on_trace_mode_changes<F>(&self, handler: F)
    where
        F: Fn(bool, bool) + Send + Sync + 'static,
    {
        self.handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(handler));
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn transition(&self, from: bool, to: bool) -> bool {
        if self
            .enabled
            .compare_exchange(from, to, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }

        let handlers = self.handlers.lock().unwrap_or_else(PoisonError::into_inner);
        for handler in handlers.iter() {
            handler(from, to);
        }
        true
    }
}

/// Turns on the global context's trace mode.
pub fn start() -> bool {
    LogContext::global().trace_flag().start()
}

/// Turns off the global context's trace mode.
pub fn stop() -> bool {
    LogContext::global().trace_flag().stop()
}

/// Reads the global context's trace mode.
#[must_use]
pub fn is_enabled() -> bool {
    LogContext::global().trace_flag().is_enabled()
}

/// Subscribes to the global context's trace mode transitions.
pub fn register_on_trace_mode_changes<F>(handler: F)
where
    F: Fn(bool, bool) + Send + Sync + 'static,
{
    LogContext::global()
        .trace_flag()
        .register_on_trace_mode_changes(handler);
}
