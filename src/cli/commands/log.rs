//! Emits a single record, mostly for shell scripts and for checking what a
//! config actually produces.

use crate::cli::{LogArgs, build_config};
use crate::context::LogContext;
use crate::logger::Logger;
use std::process::ExitCode;

#[must_use]
pub fn cmd_log(args: &LogArgs, ctx: &LogContext) -> ExitCode {
    let config = build_config(args);
    if config.trace_mode {
        ctx.trace_flag().start();
    }

    let logger = ctx.new_logger(&config);
    let message = args.message.join(" ");
    match args.record_level.level() {
        Some(level) => logger.log(level, format_args!("{message}")),
        None => logger.print(&message),
    }
    logger.flush();
    ExitCode::SUCCESS
}
