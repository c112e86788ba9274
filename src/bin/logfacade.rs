//! `logfacade` binary: thin dispatch over the library's CLI handlers.
//!
//! Usage:
//!   logfacade log [flags] <level> <message>...   Log one message
//!   logfacade backends                           List built-in backends
//!   logfacade levels                             List levels
//!   logfacade version                            Show build information

use clap::Parser;
use logfacade::LogContext;
use logfacade::cli::{Cli, Command, cmd_backends, cmd_levels, cmd_log, cmd_version};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Log(args) => cmd_log(&args, LogContext::global()),
        Command::Backends => cmd_backends(),
        Command::Levels => cmd_levels(),
        Command::Version => cmd_version(),
    }
}
