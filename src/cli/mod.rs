//! Command-line interface for logfacade.
//!
//! Parsing uses Clap; each subcommand handler lives in [`commands`].

pub mod commands;
pub mod util;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Level for the record emitted by `logfacade log`.
///
/// Fatal and panic are left out on purpose: they terminate the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    /// Bypasses level filtering.
    Print,
}

impl LogLevel {
    /// `None` for `print`, which has no level.
    #[must_use]
    pub const fn level(self) -> Option<crate::level::Level> {
        use crate::level::Level;
        match self {
            Self::Trace => Some(Level::Trace),
            Self::Debug => Some(Level::Debug),
            Self::Info => Some(Level::Info),
            Self::Warn => Some(Level::Warn),
            Self::Error => Some(Level::Error),
            Self::Print => None,
        }
    }
}

/// logfacade - Emit log records through a selectable backend.
#[derive(Debug, Parser)]
#[command(name = "logfacade", version, about = "Emit log records through a selectable backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log one message.
    Log(LogArgs),
    /// List built-in backend names.
    Backends,
    /// List level names, least to most verbose.
    Levels,
    /// Show build information.
    Version,
}

/// Flags layered over the config file and `LOGFACADE_*` environment.
#[derive(Debug, Args)]
pub struct LogArgs {
    /// Config file (defaults to ~/.config/logfacade/logfacade.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Backend name (dummy, std, logrus, zap, ...)
    #[arg(long)]
    pub backend: Option<String>,
    /// Threshold level (off, panic, fatal, error, warn, info, debug, trace)
    #[arg(long)]
    pub level: Option<String>,
    /// "file" for <dir>/output.log, anything else for the console
    #[arg(long)]
    pub target: Option<String>,
    /// Log directory for the file target
    #[arg(long, value_name = "DIR")]
    pub dir: Option<String>,
    /// Record format (text, json, plain)
    #[arg(long)]
    pub format: Option<String>,
    /// Enable trace mode
    #[arg(long)]
    pub trace: bool,
    /// Enable debug mode
    #[arg(long)]
    pub debug: bool,
    /// Level of the record
    #[arg(value_enum)]
    pub record_level: LogLevel,
    /// Message
    #[arg(required = true)]
    pub message: Vec<String>,
}

pub use commands::{cmd_backends, cmd_levels, cmd_log, cmd_version};
pub use util::build_config;
