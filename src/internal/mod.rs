//! logfacade's own diagnostics.
//!
//! These can't go through a facade logger: they report problems with building
//! one. Warnings always reach stdout; debug lines only appear when
//! `LOGFACADE_INTERNAL_DEBUG` is set.

use std::io::{self, Write};
use std::sync::OnceLock;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var_os("LOGFACADE_INTERNAL_DEBUG").is_some())
}

fn emit(tag: &str, scope: &str, msg: &str) {
    let _ = writeln!(io::stdout(), "logfacade [{tag}] {scope}: {msg}");
}

/// Configuration problems that were papered over with a fallback.
pub fn warn(scope: &str, msg: &str) {
    emit("WARN", scope, msg);
}

/// Construction details useful when diagnosing where output went.
pub fn debug(scope: &str, msg: &str) {
    if debug_enabled() {
        emit("DEBUG", scope, msg);
    }
}
