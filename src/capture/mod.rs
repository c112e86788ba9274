//! Routes a logger's output into the test harness for the duration of a test.
//!
//! Output goes through `print!`, which libtest captures per test and shows
//! only for failures. When verbose output was requested (`--nocapture`, or
//! `LOGFACADE_TEST_VERBOSE`), nothing is redirected, so lines aren't reported
//! twice.

use crate::logger::Logger;
use crate::output::Destination;

/// Restores the original destination on [`release`](Self::release) or drop.
#[must_use = "dropping the guard immediately restores the original output"]
pub struct CaptureGuard<'a> {
    logger: &'a dyn Logger,
    original: Option<Destination>,
}

impl std::fmt::Debug for CaptureGuard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureGuard")
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}

impl CaptureGuard<'_> {
    /// Whether output is currently redirected.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.original.is_some()
    }

    /// Puts the original destination back.
    pub fn release(mut self) {
        self.restore();
    }

    fn restore(&mut self) {
        if let Some(original) = self.original.take() {
            self.logger.set_output(original);
        }
    }
}

impl Drop for CaptureGuard<'_> {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Redirects `logger` into the test harness unless verbose output is on.
pub fn capture(logger: &dyn Logger) -> CaptureGuard<'_> {
    capture_with(logger, verbose_requested())
}

/// Like [`capture`], with the verbose decision made by the caller.
pub fn capture_with(logger: &dyn Logger, verbose: bool) -> CaptureGuard<'_> {
    if verbose {
        return CaptureGuard {
            logger,
            original: None,
        };
    }

    let original = logger.output();
    logger.set_output(Destination::test());
    CaptureGuard {
        logger,
        original: Some(original),
    }
}

fn verbose_requested() -> bool {
    ["RUST_TEST_NOCAPTURE", "LOGFACADE_TEST_VERBOSE"]
        .iter()
        .any(|key| std::env::var(key).is_ok_and(|v| !v.is_empty() && v != "0"))
}
