//! Config assembly shared by the CLI commands.

use super::LogArgs;
use crate::config::LoggerConfig;
use crate::internal;

/// Config file, then `LOGFACADE_*` variables, then command-line flags.
///
/// A broken config file is reported and replaced by defaults: the CLI keeps
/// the library's rule that logging setup never stops the program.
#[must_use]
pub fn build_config(args: &LogArgs) -> LoggerConfig {
    let loaded = match &args.config {
        Some(path) => LoggerConfig::load_from(path),
        None => LoggerConfig::load(),
    };
    let mut config = loaded
        .unwrap_or_else(|e| {
            internal::warn("CLI", &format!("Error loading config: {e}"));
            LoggerConfig::default()
        })
        .apply_env();

    if let Some(backend) = &args.backend {
        config.backend.clone_from(backend);
    }
    if let Some(level) = &args.level {
        config.level.clone_from(level);
    }
    if let Some(target) = &args.target {
        config.target.clone_from(target);
    }
    if let Some(dir) = &args.dir {
        config.directory.clone_from(dir);
    }
    if let Some(format) = &args.format {
        config.format.clone_from(format);
    }
    config.trace_mode |= args.trace;
    config.debug_mode |= args.debug;
    config
}
